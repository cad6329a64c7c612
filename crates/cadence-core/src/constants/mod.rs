// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Analysis windows, output limits, nutrition facts, and population defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable thresholds live in the
//! intelligence crate's configuration; values here are either physical facts
//! or the defaults that configuration starts from.

/// Rolling window lengths used by the time-series analyzer
pub mod windows {
    /// Days walked backward from today when counting a streak
    pub const STREAK_WINDOW_DAYS: u32 = 30;
    /// Days covered by the two trend halves combined
    pub const TREND_WINDOW_DAYS: u32 = 14;
    /// Days averaged for the completion ratio
    pub const COMPLETION_WINDOW_DAYS: u32 = 30;
    /// Days of history inspected when inferring a fitness profile
    pub const ACTIVITY_WINDOW_DAYS: u32 = 30;
    /// Days per week, as a float for frequency math
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Hours per day, as a float for projections
    pub const HOURS_PER_DAY: f64 = 24.0;
}

/// Output limits
pub mod limits {
    /// Maximum motivational messages returned per call
    pub const MAX_MOTIVATIONAL_MESSAGES: usize = 5;
    /// Maximum workout recommendations returned per call
    pub const MAX_WORKOUT_RECOMMENDATIONS: usize = 3;
    /// Maximum goal-conditioned nutrition tips per call
    pub const MAX_NUTRITION_TIPS: usize = 2;
    /// Display cap for progress percentages
    pub const MAX_DISPLAY_PERCENTAGE: f64 = 100.0;
}

/// Population defaults applied when profile fields are missing
pub mod defaults {
    /// Body weight used when the profile has none (kg)
    pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
    /// Typical session length assumed without workout history (minutes)
    pub const DEFAULT_SESSION_MINUTES: f64 = 30.0;
    /// Weekly session count assumed without workout history
    pub const DEFAULT_WEEKLY_SESSIONS: f64 = 2.0;
    /// Name used in messages when the profile has no display name
    pub const DEFAULT_DISPLAY_NAME: &str = "there";
}

/// Nutrition facts
pub mod nutrition {
    /// Energy per gram of protein (kcal)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Energy per gram of carbohydrate (kcal)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Energy per gram of fat (kcal)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Daily water intake per kilogram of body weight (ml)
    pub const HYDRATION_ML_PER_KG: f64 = 35.0;
}

/// Keywords used to classify categories and free-text goals
pub mod keywords {
    /// Category names that indicate a workout log
    pub const WORKOUT_CATEGORY_KEYWORDS: &[&str] = &["workout", "exercise", "training"];
    /// Units that indicate minutes of activity
    pub const MINUTE_UNITS: &[&str] = &["min", "mins", "minute", "minutes"];
}

/// Service names for structured logging
pub mod service_names {
    /// Command-line front end
    pub const CADENCE_CLI: &str = "cadence-cli";
}
