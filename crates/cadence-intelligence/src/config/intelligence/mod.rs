// ABOUTME: Intelligence configuration for goal analytics and recommendation generation
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Intelligence Configuration Module
//!
//! Typed configuration for every engine component, with defaults matching the
//! documented product behaviour.
//!
//! # Module Structure
//!
//! - `goals` - Time-series windows, trend threshold, and target adjustment rules
//! - `motivation` - Reminder bands, message thresholds, streak milestones
//! - `workout` - Workout scoring weights and fitness-level inference
//! - `nutrition` - Calorie factors, meal shares, and macro splits
//!
//! # Loading
//!
//! `IntelligenceConfig::global()` loads once: defaults, then `CADENCE_*`
//! environment overrides, then validation. A configuration that fails to load is
//! logged and replaced by the defaults.

pub mod error;
pub mod goals;
pub mod motivation;
pub mod nutrition;
pub mod workout;

pub use error::ConfigError;
pub use goals::{DecreaseRule, GoalAdjustmentConfig, GoalAnalysisConfig, IncreaseRule};
pub use motivation::{
    HourBand, MotivationConfig, MotivationLimits, MotivationThresholds, StreakMilestones,
    TimeBands,
};
pub use nutrition::{
    CalorieFactorsConfig, MacroDistribution, MealCalorieShares, MealMacroSplits, NutritionConfig,
    NutritionDefaults,
};
pub use workout::{
    ActivityPatternConfig, LevelInferenceConfig, ScoringWeights, WorkoutLimits,
    WorkoutScoringConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Time-series analysis windows and trend sensitivity
    pub goal_analysis: GoalAnalysisConfig,
    /// Target adjustment rules
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Motivational message thresholds
    pub motivation: MotivationConfig,
    /// Workout recommendation scoring
    pub workout: WorkoutScoringConfig,
    /// Nutrition recommendation parameters
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_goals()?;
        self.validate_motivation()?;
        self.validate_workout()?;
        self.nutrition.meal_shares.validate()?;
        self.nutrition.meal_macros.validate()?;

        if self.nutrition.defaults.weight_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default weight must be positive",
            ));
        }

        Ok(())
    }

    fn validate_goals(&self) -> Result<(), ConfigError> {
        let analysis = &self.goal_analysis;
        if analysis.streak_window_days == 0 || analysis.completion_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Streak and completion windows must be at least one day",
            ));
        }
        if analysis.trend_window_days < 2 || analysis.trend_window_days % 2 != 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend window must be a positive even number of days",
            ));
        }
        if analysis.trend_change_threshold <= 0.0 || analysis.trend_change_threshold >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend change threshold must be between 0 and 1",
            ));
        }

        let adjustment = &self.goal_adjustment;
        if !(0.0..=1.0).contains(&adjustment.min_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "Adjustment confidence floor must be between 0 and 1",
            ));
        }
        if adjustment.decrease.max_average_completion >= adjustment.increase.min_average_completion
        {
            return Err(ConfigError::InvalidRange(
                "Decrease threshold must be < increase threshold",
            ));
        }
        if adjustment.decrease.min_target <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum suggested target must be positive",
            ));
        }

        Ok(())
    }

    fn validate_motivation(&self) -> Result<(), ConfigError> {
        let bands = &self.motivation.time_bands;
        for band in [bands.morning, bands.midday, bands.evening] {
            if band.start >= band.end || band.end > 24 {
                return Err(ConfigError::InvalidRange(
                    "Reminder bands must satisfy start < end <= 24",
                ));
            }
        }

        let milestones = &self.motivation.milestones;
        if milestones.week >= milestones.fortnight || milestones.fortnight >= milestones.month {
            return Err(ConfigError::InvalidRange(
                "Streak milestones must be ascending",
            ));
        }

        if self.motivation.limits.max_messages == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "At least one motivational message must be allowed",
            ));
        }

        Ok(())
    }

    fn validate_workout(&self) -> Result<(), ConfigError> {
        let weights = &self.workout.weights;
        if (weights.total() - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Workout scoring weights must sum to 1.0",
            ));
        }
        if weights.adjacent_difficulty > weights.difficulty {
            return Err(ConfigError::InvalidRange(
                "Adjacent difficulty credit must not exceed exact match weight",
            ));
        }

        let levels = &self.workout.level_inference;
        if levels.beginner_max_active_days > levels.advanced_min_active_days
            || levels.beginner_max_average_units > levels.advanced_min_average_units
        {
            return Err(ConfigError::InvalidRange(
                "Beginner thresholds must not exceed advanced thresholds",
            ));
        }

        if self.workout.activity.default_session_minutes <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default session length must be positive",
            ));
        }

        if !(0.0..1.0).contains(&self.workout.limits.min_score) {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum workout score must be in [0, 1)",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Goal analysis overrides
        Self::apply_env_var(
            "CADENCE_STREAK_WINDOW_DAYS",
            &mut self.goal_analysis.streak_window_days,
        )?;
        Self::apply_env_var(
            "CADENCE_COMPLETION_WINDOW_DAYS",
            &mut self.goal_analysis.completion_window_days,
        )?;
        Self::apply_env_var(
            "CADENCE_TREND_CHANGE_THRESHOLD",
            &mut self.goal_analysis.trend_change_threshold,
        )?;

        // Goal adjustment overrides
        Self::apply_env_var(
            "CADENCE_ADJUSTMENT_MIN_CONFIDENCE",
            &mut self.goal_adjustment.min_confidence,
        )?;

        // Motivation overrides
        Self::apply_env_var(
            "CADENCE_MAX_MOTIVATIONAL_MESSAGES",
            &mut self.motivation.limits.max_messages,
        )?;

        // Workout overrides
        Self::apply_env_var(
            "CADENCE_WORKOUT_MIN_SCORE",
            &mut self.workout.limits.min_score,
        )?;
        Self::apply_env_var(
            "CADENCE_MAX_WORKOUT_RECOMMENDATIONS",
            &mut self.workout.limits.max_recommendations,
        )?;

        // Nutrition overrides
        Self::apply_env_var(
            "CADENCE_DEFAULT_WEIGHT_KG",
            &mut self.nutrition.defaults.weight_kg,
        )?;

        Ok(self)
    }
}
