// ABOUTME: Workout recommendation scorer configuration
// ABOUTME: Scoring weights, fitness-level inference thresholds, frequency bonuses, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Workout Scorer Configuration
//!
//! Weights combine four factors (difficulty match, goal overlap, duration fit,
//! frequency bonus) into a score in `[0, 1]`; they must sum to 1.0.

use cadence_core::constants::defaults::{DEFAULT_SESSION_MINUTES, DEFAULT_WEEKLY_SESSIONS};
use cadence_core::constants::limits::MAX_WORKOUT_RECOMMENDATIONS;
use serde::{Deserialize, Serialize};

/// Workout recommendation scorer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutScoringConfig {
    /// Factor weights
    pub weights: ScoringWeights,
    /// Fitness-level inference thresholds
    pub level_inference: LevelInferenceConfig,
    /// Activity-pattern defaults and frequency bonus thresholds
    pub activity: ActivityPatternConfig,
    /// Filtering and result limits
    pub limits: WorkoutLimits,
}

/// Weights for each scoring factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Exact difficulty match weight
    pub difficulty: f64,
    /// Credit for a template one level away from the user's level
    pub adjacent_difficulty: f64,
    /// Goal overlap weight
    pub goals: f64,
    /// Duration fit weight
    pub duration: f64,
    /// Frequency bonus weight
    pub bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            difficulty: 0.30,
            adjacent_difficulty: 0.15,
            goals: 0.40,
            duration: 0.20,
            bonus: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Sum of the four factor weights (adjacent credit excluded)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.difficulty + self.goals + self.duration + self.bonus
    }
}

/// Thresholds used when inferring fitness level from activity volume
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelInferenceConfig {
    /// Fewer active days than this means beginner
    pub beginner_max_active_days: u32,
    /// Lower average daily units than this means beginner
    pub beginner_max_average_units: f64,
    /// At least this many active days is required for advanced
    pub advanced_min_active_days: u32,
    /// At least this average daily volume is required for advanced
    pub advanced_min_average_units: f64,
}

impl Default for LevelInferenceConfig {
    fn default() -> Self {
        Self {
            beginner_max_active_days: 8,
            beginner_max_average_units: 20.0,
            advanced_min_active_days: 20,
            advanced_min_average_units: 45.0,
        }
    }
}

/// Activity-pattern defaults and bonus thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPatternConfig {
    /// Typical session length assumed without workout history (minutes)
    pub default_session_minutes: f64,
    /// Weekly sessions assumed without workout history
    pub default_weekly_sessions: f64,
    /// Flexibility templates earn the bonus at or above this weekly frequency
    pub high_frequency_sessions: f64,
    /// Beginner templates earn the bonus below this weekly frequency
    pub low_frequency_sessions: f64,
}

impl Default for ActivityPatternConfig {
    fn default() -> Self {
        Self {
            default_session_minutes: DEFAULT_SESSION_MINUTES,
            default_weekly_sessions: DEFAULT_WEEKLY_SESSIONS,
            high_frequency_sessions: 4.0,
            low_frequency_sessions: 3.0,
        }
    }
}

/// Filtering and result limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLimits {
    /// Templates must score strictly above this
    pub min_score: f64,
    /// Maximum recommendations returned
    pub max_recommendations: usize,
}

impl Default for WorkoutLimits {
    fn default() -> Self {
        Self {
            min_score: 0.3,
            max_recommendations: MAX_WORKOUT_RECOMMENDATIONS,
        }
    }
}
