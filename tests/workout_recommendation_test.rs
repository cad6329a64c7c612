// ABOUTME: Integration tests for workout template scoring and ranking
// ABOUTME: Covers level and goal inference from snapshots, result bounds, and the scoring fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use cadence::intelligence::workout::{Difficulty, GoalTag};
use cadence::intelligence::{
    generate_workout_recommendations, infer_fitness_profile, workout_catalog,
};
use cadence::models::{FitnessGoal, Snapshot, UserProfile};
use common::{category, log, logs_on, now, snapshot, snapshot_for};

fn lifter() -> UserProfile {
    UserProfile::new("user-2", "Jordan").with_goal_description("Advanced lifter chasing strength")
}

#[test]
fn test_recommendations_are_bounded_and_sorted() {
    let snapshot = snapshot(
        vec![category("workout", "Workout", "minutes", 30.0)],
        logs_on("workout", (0..30).step_by(3), 30.0),
    );

    let recommendations = generate_workout_recommendations(&snapshot, now());

    assert!(!recommendations.is_empty());
    assert!(recommendations.len() <= 3);
    assert!(recommendations
        .iter()
        .all(|r| r.confidence_score > 0.3 && r.confidence_score <= 1.0));
    assert!(recommendations
        .windows(2)
        .all(|pair| pair[0].confidence_score >= pair[1].confidence_score));
    assert!(recommendations.iter().all(|r| !r.reasoning.is_empty()));
}

#[test]
fn test_advanced_lifter_gets_power_lifting_first() {
    let snapshot = snapshot_for(
        lifter(),
        vec![category("workout", "Workout", "minutes", 60.0)],
        logs_on("workout", 0..20, 60.0),
    );

    let recommendations = generate_workout_recommendations(&snapshot, now());
    let ids: Vec<&str> = recommendations.iter().map(|r| r.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "advanced-power-lifting",
            "advanced-hiit-inferno",
            "dumbbell-strength-builder"
        ]
    );
    assert!((recommendations[0].confidence_score - 0.7).abs() < 1e-9);
    assert!(recommendations[0].reasoning.contains("strength"));
}

#[test]
fn test_profile_inference_from_workout_logs() {
    let snapshot = snapshot_for(
        lifter(),
        vec![
            category("workout", "Workout", "minutes", 60.0),
            category("water", "Water", "glasses", 8.0),
        ],
        [logs_on("workout", 0..20, 60.0), logs_on("water", 0..30, 8.0)].concat(),
    );

    let profile = infer_fitness_profile(&snapshot, now()).unwrap();

    assert_eq!(profile.fitness_level, Difficulty::Advanced);
    assert!(profile.level_from_profile);
    assert!(profile.goals.contains(&GoalTag::Strength));
    assert!(profile.has_workout_history);
    assert_eq!(profile.active_days, 20);
    assert!((profile.typical_session_minutes - 60.0).abs() < 1e-9);
    assert!((profile.weekly_sessions - 20.0 / (30.0 / 7.0)).abs() < 1e-9);
}

#[test]
fn test_level_from_volume_without_keywords() {
    let profile = UserProfile::new("user-3", "Riley").with_goal(FitnessGoal::LoseWeight);
    let snapshot = snapshot_for(
        profile,
        vec![category("training", "Training", "minutes", 45.0)],
        logs_on("training", 0..25, 50.0),
    );

    let inferred = infer_fitness_profile(&snapshot, now()).unwrap();
    assert_eq!(inferred.fitness_level, Difficulty::Advanced);
    assert!(!inferred.level_from_profile);
    assert!(inferred.goals.contains(&GoalTag::WeightLoss));
}

#[test]
fn test_no_history_uses_defaults_and_beginner_level() {
    let snapshot = Snapshot::new(Some(UserProfile::new("user-4", "Sam")), vec![], vec![]);

    let inferred = infer_fitness_profile(&snapshot, now()).unwrap();
    assert_eq!(inferred.fitness_level, Difficulty::Beginner);
    assert!(!inferred.has_workout_history);
    assert!((inferred.typical_session_minutes - 30.0).abs() < 1e-9);
    assert!((inferred.weekly_sessions - 2.0).abs() < 1e-9);
    assert_eq!(
        inferred.goals.iter().copied().collect::<Vec<_>>(),
        vec![GoalTag::GeneralFitness]
    );

    let recommendations = generate_workout_recommendations(&snapshot, now());
    assert!(recommendations
        .iter()
        .all(|r| r.difficulty != Difficulty::Advanced));
}

#[test]
fn test_non_finite_log_falls_back_to_beginner_session() {
    let snapshot = snapshot(
        vec![category("workout", "Workout", "minutes", 30.0)],
        vec![log("workout", 0, 30.0), log("workout", 1, f64::NAN)],
    );

    assert!(infer_fitness_profile(&snapshot, now()).is_err());

    let recommendations = generate_workout_recommendations(&snapshot, now());
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].id, "beginner-bodyweight-basics");
    assert!((recommendations[0].confidence_score - 0.5).abs() < 1e-9);
    assert!(recommendations[0].reasoning.starts_with("General recommendation"));
}

#[test]
fn test_scoring_leaves_catalog_untouched() {
    let snapshot = snapshot_for(
        lifter(),
        vec![category("workout", "Workout", "minutes", 60.0)],
        logs_on("workout", 0..20, 60.0),
    );

    let _ = generate_workout_recommendations(&snapshot, now());
    assert!(workout_catalog()
        .iter()
        .all(|template| template.confidence_score == 0.0 && template.reasoning.is_empty()));
}

#[test]
fn test_recommendation_serializes_snake_case() {
    let snapshot = snapshot(vec![], vec![]);
    let recommendations = generate_workout_recommendations(&snapshot, now());

    let json = serde_json::to_value(&recommendations[0]).unwrap();
    assert!(json["confidence_score"].is_f64());
    assert!(json["equipment_needed"].is_array());
    assert!(json["exercises"].as_array().is_some_and(|e| !e.is_empty()));
}

#[test]
fn test_recommendations_are_idempotent() {
    let snapshot = snapshot_for(
        lifter(),
        vec![category("workout", "Workout", "minutes", 60.0)],
        logs_on("workout", 0..20, 60.0),
    );

    let first = generate_workout_recommendations(&snapshot, now());
    let second = generate_workout_recommendations(&snapshot, now());
    assert_eq!(first, second);
}
