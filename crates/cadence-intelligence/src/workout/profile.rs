// ABOUTME: Derives the fitness profile used by the workout scorer from profile text and logs
// ABOUTME: Infers fitness level, goal tags, typical session length, and weekly frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use super::catalog::{Difficulty, GoalTag};
use crate::config::intelligence::{ActivityPatternConfig, LevelInferenceConfig};
use crate::time_series::DailySeries;
use cadence_core::constants::windows::{ACTIVITY_WINDOW_DAYS, DAYS_PER_WEEK};
use cadence_core::errors::{AppError, AppResult};
use cadence_core::models::{DailyLog, Snapshot, UserProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Keyword table mapping free-text goals to tags
const GOAL_KEYWORDS: &[(GoalTag, &[&str])] = &[
    (GoalTag::WeightLoss, &["lose", "loss", "fat", "slim", "lean", "tone"]),
    (GoalTag::MuscleGain, &["muscle", "gain", "bulk", "mass", "hypertrophy"]),
    (GoalTag::Strength, &["strength", "strong", "power", "lift"]),
    (GoalTag::Endurance, &["endurance", "cardio", "stamina", "run", "marathon"]),
    (GoalTag::Flexibility, &["flexib", "stretch", "yoga", "mobility"]),
];

/// User attributes the scorer matches templates against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessProfileSnapshot {
    /// Inferred fitness level
    pub fitness_level: Difficulty,
    /// Whether the level came from explicit profile keywords
    pub level_from_profile: bool,
    /// Goal tags, never empty
    pub goals: BTreeSet<GoalTag>,
    /// Typical session length in minutes
    pub typical_session_minutes: f64,
    /// Typical sessions per week
    pub weekly_sessions: f64,
    /// Days with activity in the window used for level inference
    pub active_days: u32,
    /// Mean total on active days in the window used for level inference
    pub average_daily_units: f64,
    /// Whether any workout-like category contributed
    pub has_workout_history: bool,
}

/// Map lower-case goal text to goal tags, defaulting to general fitness
#[must_use]
pub fn extract_goals(goal_text: &str) -> BTreeSet<GoalTag> {
    let text = goal_text.to_lowercase();
    let mut goals: BTreeSet<GoalTag> = GOAL_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(tag, _)| *tag)
        .collect();

    if goals.is_empty() {
        goals.insert(GoalTag::GeneralFitness);
    }
    goals
}

/// Explicit level keyword in the goal text, if any
#[must_use]
pub fn explicit_level(goal_text: &str) -> Option<Difficulty> {
    let text = goal_text.to_lowercase();
    if text.contains("beginner") {
        Some(Difficulty::Beginner)
    } else if text.contains("advanced") {
        Some(Difficulty::Advanced)
    } else {
        None
    }
}

/// Classify a level from activity volume
#[must_use]
pub fn level_from_volume(
    active_days: u32,
    average_daily_units: f64,
    config: &LevelInferenceConfig,
) -> Difficulty {
    if active_days < config.beginner_max_active_days
        || average_daily_units < config.beginner_max_average_units
    {
        Difficulty::Beginner
    } else if active_days >= config.advanced_min_active_days
        && average_daily_units >= config.advanced_min_average_units
    {
        Difficulty::Advanced
    } else {
        Difficulty::Intermediate
    }
}

/// Active-day count and mean active-day total within the activity window
fn volume(series: &DailySeries, today: NaiveDate) -> (u32, f64) {
    let active = series.active_days(today, ACTIVITY_WINDOW_DAYS);
    if active.is_empty() {
        return (0, 0.0);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    // Safe: bounded by the window length
    let (count, days) = (active.len() as u32, active.len() as f64);
    (count, active.iter().map(|(_, total)| total).sum::<f64>() / days)
}

/// Build the scorer's view of the user
///
/// # Errors
///
/// Returns an error when a log value is not a finite number
pub fn infer_profile(
    snapshot: &Snapshot,
    today: NaiveDate,
    levels: &LevelInferenceConfig,
    activity: &ActivityPatternConfig,
) -> AppResult<FitnessProfileSnapshot> {
    if let Some(log) = snapshot.logs.iter().find(|log| !log.value.is_finite()) {
        return Err(AppError::invalid_input(format!(
            "Log value is not a finite number: {}",
            log.value
        ))
        .with_resource_id(log.id.clone()));
    }

    let signal_categories: HashSet<&str> = snapshot
        .categories
        .iter()
        .filter(|category| category.is_workout_like())
        .map(|category| category.id.as_str())
        .collect();
    let signal_logs: Vec<&DailyLog> = snapshot
        .logs
        .iter()
        .filter(|log| signal_categories.contains(log.category_id.as_str()))
        .collect();

    let signal_series = DailySeries::from_all_logs(signal_logs.iter().copied());
    let (signal_days, signal_average) = volume(&signal_series, today);
    let has_workout_history = signal_days > 0;

    // Without any workout-like category, overall logging volume stands in for activity
    let (active_days, average_daily_units) = if signal_categories.is_empty() {
        volume(&DailySeries::from_all_logs(&snapshot.logs), today)
    } else {
        (signal_days, signal_average)
    };

    let goal_text = snapshot
        .profile
        .as_ref()
        .map(UserProfile::goal_text)
        .unwrap_or_default();
    let explicit = explicit_level(&goal_text);
    let fitness_level =
        explicit.unwrap_or_else(|| level_from_volume(active_days, average_daily_units, levels));

    let (typical_session_minutes, weekly_sessions) = if has_workout_history {
        (
            signal_average,
            f64::from(signal_days) / (f64::from(ACTIVITY_WINDOW_DAYS) / DAYS_PER_WEEK),
        )
    } else {
        (
            activity.default_session_minutes,
            activity.default_weekly_sessions,
        )
    };

    Ok(FitnessProfileSnapshot {
        fitness_level,
        level_from_profile: explicit.is_some(),
        goals: extract_goals(&goal_text),
        typical_session_minutes,
        weekly_sessions,
        active_days,
        average_daily_units,
        has_workout_history,
    })
}
