// ABOUTME: Goal analytics and recommendation engine crate root
// ABOUTME: Declares engine modules and exposes one pure function per generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

#![deny(unsafe_code)]

//! # Cadence Intelligence
//!
//! Turns a snapshot of tracking categories and daily logs into derived records:
//!
//! - **`time_series`**: streaks, trend direction, and average completion
//! - **`goal_progress`**: per-category `GoalAnalysis` and an overview
//! - **motivation**: prioritized motivational messages
//! - **`goal_adjustment`**: confident target increase/decrease suggestions
//! - **workout**: scored workout templates
//! - **nutrition**: meal plan, tips, and a featured recipe
//!
//! Every generator is a pure function of the snapshot and an explicit `now`.
//! Engines read `IntelligenceConfig::global()` unless built with `with_config`.

/// Typed configuration with environment overrides
pub mod config;
/// Goal adjustment advisor
pub mod goal_adjustment;
/// Goal progress evaluator
pub mod goal_progress;
/// Motivational message generator
pub mod motivation;
/// Nutrition recommendation generator
pub mod nutrition;
/// Time-series analyzer
pub mod time_series;
/// Workout recommendation scorer
pub mod workout;

pub use config::IntelligenceConfig;
pub use goal_adjustment::{AdjustmentType, GoalAdjustmentAdvisor, GoalAdjustmentSuggestion};
pub use goal_progress::{summarize_goals, GoalAnalysis, GoalProgressEvaluator, GoalsOverview};
pub use motivation::{
    seeded_rng, MessagePriority, MessageType, MotivationEngine, MotivationalMessage,
};
pub use nutrition::{NutritionAdvisor, NutritionRecommendation};
pub use time_series::{daily_totals, DailySeries, TimeSeriesAnalyzer, TrendDirection};
pub use workout::{
    workout_catalog, FitnessProfileSnapshot, WorkoutRecommendation, WorkoutRecommender,
};

use cadence_core::errors::AppResult;
use cadence_core::models::{Snapshot, UserProfile};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-category goal analyses, in category order
#[must_use]
pub fn analyze_goals(snapshot: &Snapshot, now: NaiveDateTime) -> Vec<GoalAnalysis> {
    GoalProgressEvaluator::new().analyze(snapshot, now)
}

/// Between one and the configured maximum of ranked messages
#[must_use]
pub fn generate_motivational_messages(
    snapshot: &Snapshot,
    now: NaiveDateTime,
) -> Vec<MotivationalMessage> {
    MotivationEngine::new().generate(snapshot, now)
}

/// Target adjustments above the confidence floor, most confident first
#[must_use]
pub fn generate_goal_adjustments(
    snapshot: &Snapshot,
    now: NaiveDateTime,
) -> Vec<GoalAdjustmentSuggestion> {
    GoalAdjustmentAdvisor::new().generate(snapshot, now)
}

/// Best-scoring workout templates, highest first
#[must_use]
pub fn generate_workout_recommendations(
    snapshot: &Snapshot,
    now: NaiveDateTime,
) -> Vec<WorkoutRecommendation> {
    WorkoutRecommender::new().recommend(snapshot, now)
}

/// Meal plan, tips, and featured recipe for a profile
#[must_use]
pub fn generate_nutrition_recommendations(
    profile: Option<&UserProfile>,
) -> Vec<NutritionRecommendation> {
    NutritionAdvisor::new().recommend(profile)
}

/// The workout scorer's view of the user
///
/// # Errors
///
/// Returns an error when a log value is not a finite number
pub fn infer_fitness_profile(
    snapshot: &Snapshot,
    now: NaiveDateTime,
) -> AppResult<FitnessProfileSnapshot> {
    WorkoutRecommender::new().infer_profile(snapshot, now)
}

/// Output of every generator for one snapshot and instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineReport {
    /// Instant the report was generated for
    pub generated_at: NaiveDateTime,
    /// Per-category analyses
    pub goals: Vec<GoalAnalysis>,
    /// Roll-up of the analyses
    pub overview: GoalsOverview,
    /// Ranked motivational messages
    pub messages: Vec<MotivationalMessage>,
    /// Target adjustment suggestions
    pub adjustments: Vec<GoalAdjustmentSuggestion>,
    /// Workout recommendations
    pub workouts: Vec<WorkoutRecommendation>,
    /// Nutrition recommendations
    pub nutrition: Vec<NutritionRecommendation>,
}

/// Run every generator once
///
/// Goal analyses are computed once and shared by the message generator and the
/// adjustment advisor.
#[must_use]
pub fn generate_report(snapshot: &Snapshot, now: NaiveDateTime) -> EngineReport {
    let config = IntelligenceConfig::global();
    let goals = GoalProgressEvaluator::new().analyze(snapshot, now);
    let motivation =
        MotivationEngine::with_config(config.motivation.clone(), config.goal_analysis.clone());

    let messages = if snapshot.profile.is_none() || snapshot.categories.is_empty() {
        motivation.generate(snapshot, now)
    } else {
        motivation.generate_from_analyses(
            &goals,
            snapshot.display_name(),
            now,
            &mut seeded_rng(now),
        )
    };

    EngineReport {
        generated_at: now,
        overview: summarize_goals(&goals),
        messages,
        adjustments: GoalAdjustmentAdvisor::new().suggest(&goals),
        workouts: WorkoutRecommender::new().recommend(snapshot, now),
        nutrition: NutritionAdvisor::new().recommend(snapshot.profile.as_ref()),
        goals,
    }
}
