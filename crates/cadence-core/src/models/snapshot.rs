// ABOUTME: Snapshot model bundling profile, categories, and logs for one engine call
// ABOUTME: The engine reads snapshots and never mutates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use super::{DailyLog, TrackingCategory, UserProfile};
use crate::constants::defaults::DEFAULT_DISPLAY_NAME;
use serde::{Deserialize, Serialize};

/// In-memory input assembled by the caller from its record store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Profile of the user, absent before onboarding completes
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Active tracking categories
    #[serde(default)]
    pub categories: Vec<TrackingCategory>,
    /// Logs in no particular order
    #[serde(default)]
    pub logs: Vec<DailyLog>,
}

impl Snapshot {
    /// Assemble a snapshot
    #[must_use]
    pub const fn new(
        profile: Option<UserProfile>,
        categories: Vec<TrackingCategory>,
        logs: Vec<DailyLog>,
    ) -> Self {
        Self {
            profile,
            categories,
            logs,
        }
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, category_id: &str) -> Option<&TrackingCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Logs belonging to one category
    pub fn logs_for<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a DailyLog> {
        self.logs.iter().filter(move |log| log.category_id == category_id)
    }

    /// Name used when addressing the user
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Whether there is nothing to analyze
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.logs.is_empty()
    }
}
