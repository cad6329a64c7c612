// ABOUTME: Integration tests for streaks, trend classification, and average completion
// ABOUTME: Exercises same-day summing, empty-today handling, and the zero-baseline trend guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::similar_names)]

mod common;

use cadence::intelligence::config::intelligence::GoalAnalysisConfig;
use cadence::intelligence::time_series::classify_trend;
use cadence::intelligence::{daily_totals, DailySeries, TimeSeriesAnalyzer, TrendDirection};
use common::{day, log, logs_on, today};

fn analyzer() -> TimeSeriesAnalyzer {
    TimeSeriesAnalyzer::with_config(GoalAnalysisConfig::default())
}

#[test]
fn test_same_day_logs_are_summed() {
    let logs = vec![
        log("water", 0, 3.0),
        log("water", 0, 2.0),
        log("water", 1, 4.0),
        log("steps", 0, 9000.0),
    ];

    let totals = daily_totals(&logs, "water");
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[&today()], 5.0);
    assert_eq!(totals[&day(1)], 4.0);
}

#[test]
fn test_streak_ignores_empty_today() {
    let logs = logs_on("water", 1..=7, 8.0);
    let series = DailySeries::from_logs(&logs, "water");

    assert_eq!(analyzer().calculate_streak(&series, today()), 7);
}

#[test]
fn test_streak_counts_today_when_logged() {
    let logs = logs_on("water", 0..=4, 8.0);
    let series = DailySeries::from_logs(&logs, "water");

    assert_eq!(analyzer().calculate_streak(&series, today()), 5);
}

#[test]
fn test_gap_before_today_breaks_streak() {
    // Logged today and three days ago, nothing yesterday
    let logs = vec![log("water", 0, 8.0), log("water", 3, 8.0)];
    let series = DailySeries::from_logs(&logs, "water");

    assert_eq!(analyzer().calculate_streak(&series, today()), 1);
}

#[test]
fn test_streak_is_bounded_by_window() {
    let logs = logs_on("water", 0..60, 8.0);
    let series = DailySeries::from_logs(&logs, "water");

    assert_eq!(analyzer().calculate_streak(&series, today()), 30);
}

#[test]
fn test_trend_improving_and_declining_are_symmetric() {
    let rising = [logs_on("steps", 0..7, 10_000.0), logs_on("steps", 7..14, 5_000.0)].concat();
    let falling = [logs_on("steps", 0..7, 5_000.0), logs_on("steps", 7..14, 10_000.0)].concat();

    let rising = DailySeries::from_logs(&rising, "steps");
    let falling = DailySeries::from_logs(&falling, "steps");

    assert_eq!(
        analyzer().calculate_trend(&rising, today()),
        TrendDirection::Improving
    );
    assert_eq!(
        analyzer().calculate_trend(&falling, today()),
        TrendDirection::Declining
    );
}

#[test]
fn test_trend_within_threshold_is_stable() {
    let logs = [logs_on("steps", 0..7, 10_500.0), logs_on("steps", 7..14, 10_000.0)].concat();
    let series = DailySeries::from_logs(&logs, "steps");

    assert_eq!(
        analyzer().calculate_trend(&series, today()),
        TrendDirection::Stable
    );
}

#[test]
fn test_trend_from_zero_baseline_is_improving() {
    let logs = logs_on("steps", 0..3, 4_000.0);
    let series = DailySeries::from_logs(&logs, "steps");

    assert_eq!(
        analyzer().calculate_trend(&series, today()),
        TrendDirection::Improving
    );
    assert_eq!(classify_trend(0.0, 0.0, 0.1), TrendDirection::Stable);
}

#[test]
fn test_average_completion_counts_missing_days_as_zero() {
    // 15 of 30 days fully met
    let logs = logs_on("water", (0..30).step_by(2), 8.0);
    let series = DailySeries::from_logs(&logs, "water");

    let average = analyzer().calculate_average_completion(&series, 8.0, today());
    assert!((average - 0.5).abs() < 1e-9);
}

#[test]
fn test_average_completion_is_uncapped() {
    let logs = logs_on("water", 0..30, 16.0);
    let series = DailySeries::from_logs(&logs, "water");

    let average = analyzer().calculate_average_completion(&series, 8.0, today());
    assert!((average - 2.0).abs() < 1e-9);
}

#[test]
fn test_non_positive_target_yields_zero_completion() {
    let logs = logs_on("water", 0..5, 8.0);
    let series = DailySeries::from_logs(&logs, "water");

    assert_eq!(
        analyzer().calculate_average_completion(&series, 0.0, today()),
        0.0
    );
}

#[test]
fn test_logs_older_than_windows_are_ignored() {
    let logs = logs_on("water", 40..50, 8.0);
    let series = DailySeries::from_logs(&logs, "water");

    assert_eq!(analyzer().calculate_streak(&series, today()), 0);
    assert_eq!(
        analyzer().calculate_trend(&series, today()),
        TrendDirection::Stable
    );
    assert_eq!(
        analyzer().calculate_average_completion(&series, 8.0, today()),
        0.0
    );
}
