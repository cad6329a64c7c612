// ABOUTME: Daily log model recording one contribution toward a tracking category
// ABOUTME: Several logs may share a category and date; their values are summed per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded contribution to a category on a calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Opaque identifier assigned by the record store
    pub id: String,
    /// Identifier of the owning `TrackingCategory`
    pub category_id: String,
    /// Calendar day (ISO `YYYY-MM-DD`, no time component)
    pub date: NaiveDate,
    /// Logged amount in the category's unit, never negative
    pub value: f64,
    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyLog {
    /// Create a log without notes
    pub fn new(
        id: impl Into<String>,
        category_id: impl Into<String>,
        date: NaiveDate,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            date,
            value,
            notes: None,
        }
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Whether the logged value is usable in arithmetic
    #[must_use]
    pub fn has_valid_value(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}
