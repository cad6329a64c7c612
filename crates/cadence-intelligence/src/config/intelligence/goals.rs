// ABOUTME: Goal analysis and goal adjustment configuration
// ABOUTME: Window lengths, trend threshold, and the increase/decrease rules for daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Goal Engine Configuration
//!
//! Provides configuration for the time-series analyzer that feeds goal analysis
//! records, and for the advisor that proposes new daily targets from them.

use cadence_core::constants::windows::{
    COMPLETION_WINDOW_DAYS, STREAK_WINDOW_DAYS, TREND_WINDOW_DAYS,
};
use serde::{Deserialize, Serialize};

/// Time-series analysis windows and trend sensitivity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAnalysisConfig {
    /// Maximum number of days walked back when counting a streak
    pub streak_window_days: u32,
    /// Days covered by the trend comparison, split into two equal halves
    pub trend_window_days: u32,
    /// Days averaged into the completion ratio
    pub completion_window_days: u32,
    /// Relative change of the recent half over the older half that counts as a trend
    pub trend_change_threshold: f64,
}

impl Default for GoalAnalysisConfig {
    fn default() -> Self {
        Self {
            streak_window_days: STREAK_WINDOW_DAYS,
            trend_window_days: TREND_WINDOW_DAYS,
            completion_window_days: COMPLETION_WINDOW_DAYS,
            trend_change_threshold: 0.10,
        }
    }
}

/// Goal Adjustment Advisor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Rule for raising a target the user consistently beats
    pub increase: IncreaseRule,
    /// Rule for lowering a target the user consistently misses
    pub decrease: DecreaseRule,
    /// Suggestions at or below this confidence are dropped
    pub min_confidence: f64,
}

/// Thresholds for suggesting a higher daily target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncreaseRule {
    /// Average completion must exceed this ratio
    pub min_average_completion: f64,
    /// Streak must be at least this many days
    pub min_streak_days: u32,
    /// Upper bound on the fractional increase
    pub max_increase_fraction: f64,
    /// Confidence at exactly `min_average_completion`
    pub base_confidence: f64,
    /// Confidence gained per unit of completion above the threshold
    pub confidence_slope: f64,
    /// Confidence ceiling
    pub max_confidence: f64,
}

/// Thresholds for suggesting a lower daily target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecreaseRule {
    /// Average completion must fall below this ratio
    pub max_average_completion: f64,
    /// Lower bound on the fractional decrease
    pub min_decrease_fraction: f64,
    /// Decrease fraction is `pivot - average_completion` when larger than the minimum
    pub decrease_pivot: f64,
    /// Confidence at exactly `max_average_completion`
    pub base_confidence: f64,
    /// Confidence gained per unit of completion below the threshold
    pub confidence_slope: f64,
    /// Confidence ceiling
    pub max_confidence: f64,
    /// Suggested targets never drop below this
    pub min_target: f64,
}

impl Default for IncreaseRule {
    fn default() -> Self {
        Self {
            min_average_completion: 1.3,
            min_streak_days: 7,
            max_increase_fraction: 0.25,
            base_confidence: 0.7,
            confidence_slope: 0.5,
            max_confidence: 0.95,
        }
    }
}

impl Default for DecreaseRule {
    fn default() -> Self {
        Self {
            max_average_completion: 0.4,
            min_decrease_fraction: 0.2,
            decrease_pivot: 0.6,
            base_confidence: 0.6,
            confidence_slope: 0.75,
            max_confidence: 0.9,
            min_target: 1.0,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            increase: IncreaseRule::default(),
            decrease: DecreaseRule::default(),
            min_confidence: 0.7,
        }
    }
}
