// ABOUTME: Shared fixtures for integration tests: fixed clock, categories, and log factories
// ABOUTME: Builds snapshots relative to a fixed "now" so day offsets read naturally in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `cadence`

use cadence::models::{DailyLog, FitnessGoal, Snapshot, TrackingCategory, UserProfile};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        // Another test binary thread may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Monday 10 March 2025, the fixed "today" of every fixture
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// The fixed "now" at a given local hour and minute
pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    today().and_time(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
}

/// Default evaluation instant: 19:30 local, inside the evening reminder band
pub fn now() -> NaiveDateTime {
    at(19, 30)
}

/// Calendar day `days_ago` days before today
pub fn day(days_ago: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days_ago)).unwrap()
}

/// Category with the given target
pub fn category(id: &str, name: &str, unit: &str, target: f64) -> TrackingCategory {
    TrackingCategory::new(id, name, unit, target)
}

/// One log `days_ago` days before today
pub fn log(category_id: &str, days_ago: u64, value: f64) -> DailyLog {
    DailyLog::new(
        format!("{category_id}-{days_ago}-{value}"),
        category_id,
        day(days_ago),
        value,
    )
}

/// One log of `value` on each of the given days
pub fn logs_on<I>(category_id: &str, days_ago: I, value: f64) -> Vec<DailyLog>
where
    I: IntoIterator<Item = u64>,
{
    days_ago
        .into_iter()
        .map(|offset| log(category_id, offset, value))
        .collect()
}

/// Onboarded profile with a goal and weight
pub fn profile() -> UserProfile {
    UserProfile::new("user-1", "Alex")
        .with_goal(FitnessGoal::MaintainHealth)
        .with_weight(70.0)
}

/// Snapshot with the default profile
pub fn snapshot(categories: Vec<TrackingCategory>, logs: Vec<DailyLog>) -> Snapshot {
    init_test_logging();
    Snapshot::new(Some(profile()), categories, logs)
}

/// Snapshot with a custom profile
pub fn snapshot_for(
    profile: UserProfile,
    categories: Vec<TrackingCategory>,
    logs: Vec<DailyLog>,
) -> Snapshot {
    init_test_logging();
    Snapshot::new(Some(profile), categories, logs)
}
