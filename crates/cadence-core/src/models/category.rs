// ABOUTME: Tracking category model describing a user-defined daily goal dimension
// ABOUTME: Carries the display unit, daily target, and colour used by the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use crate::constants::keywords::{MINUTE_UNITS, WORKOUT_CATEGORY_KEYWORDS};
use serde::{Deserialize, Serialize};

/// A user-defined goal dimension such as steps, water, or workout minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCategory {
    /// Opaque identifier assigned by the record store
    pub id: String,
    /// Display name ("Steps", "Water", "Workout")
    pub name: String,
    /// Display unit ("steps", "glasses", "minutes")
    pub unit: String,
    /// Positive daily target in `unit`
    pub daily_target: f64,
    /// Display colour, ignored by the engine
    #[serde(default)]
    pub color: String,
}

impl TrackingCategory {
    /// Create a category with no display colour
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        daily_target: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            daily_target,
            color: String::new(),
        }
    }

    /// Set the display colour
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Whether the lower-cased name contains any of `keywords`
    #[must_use]
    pub fn name_contains_any(&self, keywords: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        keywords.iter().any(|keyword| name.contains(keyword))
    }

    /// Whether this category records workout sessions, judged by name or minute units
    #[must_use]
    pub fn is_workout_like(&self) -> bool {
        let unit = self.unit.trim().to_lowercase();
        self.name_contains_any(WORKOUT_CATEGORY_KEYWORDS) || MINUTE_UNITS.contains(&unit.as_str())
    }
}
