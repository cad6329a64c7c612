// ABOUTME: Data models for goal tracking: categories, daily logs, profiles, and snapshots
// ABOUTME: Re-exports the record types supplied by the caller's record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Core data models
//!
//! These mirror the records held by the hosted store. Field names serialize in
//! camelCase so a snapshot exported from the store deserializes without mapping.

/// User-defined goal dimensions
mod category;
/// Individual logged contributions
mod daily_log;
/// Meal types shared by nutrition planning
mod nutrition;
/// User profile and fitness goal
mod profile;
/// Caller-assembled input bundle
mod snapshot;

pub use category::TrackingCategory;
pub use daily_log::DailyLog;
pub use nutrition::MealType;
pub use profile::{FitnessGoal, Gender, UserProfile};
pub use snapshot::Snapshot;
