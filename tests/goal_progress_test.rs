// ABOUTME: Integration tests for per-category goal analysis and the goals overview
// ABOUTME: Covers display capping, days-to-complete projection, ordering, and roll-up counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use cadence::intelligence::config::intelligence::GoalAnalysisConfig;
use cadence::intelligence::{
    analyze_goals, generate_motivational_messages, summarize_goals, GoalProgressEvaluator,
    MessageType, TrendDirection,
};
use common::{at, category, log, logs_on, now, snapshot};

#[test]
fn test_overachievement_caps_display_and_celebrates() {
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        vec![log("steps", 0, 12_000.0)],
    );

    let analyses = analyze_goals(&snapshot, now());
    let steps = &analyses[0];

    assert_eq!(steps.progress_percentage, 100.0);
    assert!((steps.completion_ratio - 1.2).abs() < 1e-9);
    assert_eq!(steps.days_to_complete, 0);
    assert!(steps.is_target_met());
    assert_eq!(steps.remaining(), 0.0);

    let messages = generate_motivational_messages(&snapshot, now());
    assert!(messages
        .iter()
        .any(|m| m.message_type == MessageType::Celebration && m.title == "Goal Crushed!"));
}

#[test]
fn test_days_to_complete_extrapolates_todays_rate() {
    // 2 glasses by noon: 1/6 glass per hour, 6 left takes 36 hours
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        vec![log("water", 0, 2.0)],
    );

    let analysis = &analyze_goals(&snapshot, at(12, 0))[0];
    assert_eq!(analysis.progress_percentage, 25.0);
    assert_eq!(analysis.days_to_complete, 2);
}

#[test]
fn test_nothing_logged_today_projects_one_day() {
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        logs_on("water", 1..=3, 8.0),
    );

    let analysis = &analyze_goals(&snapshot, now())[0];
    assert_eq!(analysis.current_progress, 0.0);
    assert_eq!(analysis.progress_percentage, 0.0);
    assert_eq!(analysis.days_to_complete, 1);
    assert_eq!(analysis.streak, 3);
}

#[test]
fn test_analyses_follow_category_order_and_ignore_foreign_logs() {
    let snapshot = snapshot(
        vec![
            category("water", "Water", "glasses", 8.0),
            category("steps", "Steps", "steps", 10_000.0),
            category("sleep", "Sleep", "hours", 8.0),
        ],
        vec![
            log("water", 0, 4.0),
            log("steps", 0, 5_000.0),
            log("orphan", 0, 99.0),
        ],
    );

    let analyses = analyze_goals(&snapshot, now());
    let ids: Vec<&str> = analyses.iter().map(|a| a.category_id.as_str()).collect();

    assert_eq!(ids, vec!["water", "steps", "sleep"]);
    assert_eq!(analyses[0].current_progress, 4.0);
    assert_eq!(analyses[1].progress_percentage, 50.0);
    assert_eq!(analyses[2].current_progress, 0.0);
}

#[test]
fn test_zero_target_yields_zero_ratio() {
    let evaluator = GoalProgressEvaluator::with_config(GoalAnalysisConfig::default());
    let logs = vec![log("free", 0, 3.0)];

    let analysis = evaluator.evaluate_category(&category("free", "Free", "units", 0.0), &logs, now());
    assert_eq!(analysis.completion_ratio, 0.0);
    assert_eq!(analysis.average_completion, 0.0);
    assert_eq!(analysis.progress_percentage, 0.0);
}

#[test]
fn test_overview_rolls_up_analyses() {
    let snapshot = snapshot(
        vec![
            category("water", "Water", "glasses", 8.0),
            category("steps", "Steps", "steps", 10_000.0),
        ],
        [
            logs_on("water", 0..10, 8.0),
            vec![log("steps", 0, 5_000.0)],
        ]
        .concat(),
    );

    let analyses = analyze_goals(&snapshot, now());
    let overview = summarize_goals(&analyses);

    assert_eq!(overview.total_goals, 2);
    assert_eq!(overview.goals_met_today, 1);
    assert_eq!(overview.average_progress_percentage, 75.0);
    assert_eq!(overview.longest_streak, Some(("Water".to_owned(), 10)));
    assert_eq!(overview.improving, 2);
    assert_eq!(
        analyses.iter().filter(|a| a.trend == TrendDirection::Improving).count(),
        2
    );
}

#[test]
fn test_overview_of_nothing_is_empty() {
    let overview = summarize_goals(&[]);
    assert_eq!(overview.total_goals, 0);
    assert!(overview.longest_streak.is_none());
}

#[test]
fn test_analysis_serializes_camel_case() {
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        vec![log("water", 0, 4.0)],
    );

    let json = serde_json::to_value(&analyze_goals(&snapshot, now())[0]).unwrap();
    assert_eq!(json["categoryId"], "water");
    assert_eq!(json["progressPercentage"], 50.0);
    assert_eq!(json["trend"], "improving");
    assert!(json["daysToComplete"].is_u64());
}

#[test]
fn test_non_finite_logs_are_skipped() {
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        vec![
            log("water", 0, 4.0),
            log("water", 0, f64::NAN),
            log("water", 1, f64::INFINITY),
        ],
    );

    let water = &analyze_goals(&snapshot, now())[0];

    assert_eq!(water.current_progress, 4.0);
    assert_eq!(water.progress_percentage, 50.0);
    assert!((0.0..=100.0).contains(&water.progress_percentage));
    assert!((water.average_completion - 0.5 / 30.0).abs() < 1e-9);
    assert_eq!(water.streak, 1);
    assert_eq!(water.days_to_complete, 1);
}

#[test]
fn test_longest_streak_tie_goes_to_first_category() {
    let snapshot = snapshot(
        vec![
            category("water", "Water", "glasses", 8.0),
            category("steps", "Steps", "steps", 10_000.0),
        ],
        [logs_on("water", 0..5, 8.0), logs_on("steps", 0..5, 10_000.0)].concat(),
    );

    let overview = summarize_goals(&analyze_goals(&snapshot, now()));
    assert_eq!(overview.longest_streak, Some(("Water".to_owned(), 5)));
}
