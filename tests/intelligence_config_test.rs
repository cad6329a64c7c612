// ABOUTME: Tests for intelligence configuration defaults, validation, and environment overrides
// ABOUTME: Environment-mutating tests run serially so overrides never leak between cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use cadence::errors::{AppError, ErrorCode};
use cadence::intelligence::config::intelligence::{ConfigError, HourBand, ScoringWeights};
use cadence::intelligence::IntelligenceConfig;
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 4] = [
    "CADENCE_TREND_CHANGE_THRESHOLD",
    "CADENCE_MAX_MOTIVATIONAL_MESSAGES",
    "CADENCE_WORKOUT_MIN_SCORE",
    "CADENCE_DEFAULT_WEIGHT_KG",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = IntelligenceConfig::default();
    config.validate().unwrap();

    assert_eq!(config.goal_analysis.streak_window_days, 30);
    assert_eq!(config.goal_analysis.trend_window_days, 14);
    assert_eq!(config.goal_analysis.trend_change_threshold, 0.10);
    assert_eq!(config.goal_adjustment.min_confidence, 0.7);
    assert_eq!(config.motivation.limits.max_messages, 5);
    assert_eq!(config.workout.limits.max_recommendations, 3);
    assert_eq!(config.nutrition.defaults.weight_kg, 70.0);
}

#[test]
fn test_scoring_weights_must_sum_to_one() {
    let mut config = IntelligenceConfig::default();
    config.workout.weights = ScoringWeights {
        difficulty: 0.5,
        ..ScoringWeights::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeights(_))
    ));
}

#[test]
fn test_inverted_reminder_band_is_rejected() {
    let mut config = IntelligenceConfig::default();
    config.motivation.time_bands.evening = HourBand::new(21, 18);

    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_odd_trend_window_is_rejected() {
    let mut config = IntelligenceConfig::default();
    config.goal_analysis.trend_window_days = 13;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_meal_shares_must_sum_to_one() {
    let mut config = IntelligenceConfig::default();
    config.nutrition.meal_shares.snack = 0.3;

    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_overrides();
    env::set_var("CADENCE_TREND_CHANGE_THRESHOLD", "0.2");
    env::set_var("CADENCE_MAX_MOTIVATIONAL_MESSAGES", "3");
    env::set_var("CADENCE_DEFAULT_WEIGHT_KG", "82.5");

    let config = IntelligenceConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.goal_analysis.trend_change_threshold, 0.2);
    assert_eq!(config.motivation.limits.max_messages, 3);
    assert_eq!(config.nutrition.defaults.weight_kg, 82.5);
}

#[test]
#[serial]
fn test_unparseable_override_is_an_error() {
    clear_overrides();
    env::set_var("CADENCE_WORKOUT_MIN_SCORE", "not-a-number");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_that_breaks_validation_is_an_error() {
    clear_overrides();
    env::set_var("CADENCE_TREND_CHANGE_THRESHOLD", "1.5");

    let result = IntelligenceConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_config_serializes_for_inspection() {
    let json = serde_json::to_value(IntelligenceConfig::default()).unwrap();

    assert_eq!(json["motivation"]["time_bands"]["morning"]["start"], 6);
    assert_eq!(json["nutrition"]["meal_shares"]["lunch"], 0.35);
}

#[test]
fn test_config_errors_map_to_app_error_codes() {
    let unreadable = AppError::from(ConfigError::Parse("CADENCE_WORKOUT_MIN_SCORE".into()));
    assert_eq!(unreadable.code, ErrorCode::ConfigError);
    assert!(unreadable.message.contains("CADENCE_WORKOUT_MIN_SCORE"));

    let mut config = IntelligenceConfig::default();
    config.goal_analysis.trend_window_days = 13;
    let invalid = AppError::from(config.validate().unwrap_err());
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert!(invalid.source.is_some());
}
