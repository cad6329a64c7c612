// ABOUTME: Goal progress evaluation combining today's totals with time-series analysis
// ABOUTME: Produces per-category GoalAnalysis records and an overall summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Goal Progress Evaluator
//!
//! One [`GoalAnalysis`] per category, recomputed from the snapshot on every call.
//! The display percentage is capped at 100; the completion figures handed to the
//! advisor are not.

use crate::config::intelligence::{GoalAnalysisConfig, IntelligenceConfig};
use crate::time_series::{DailySeries, TimeSeriesAnalyzer, TrendDirection};
use cadence_core::constants::limits::MAX_DISPLAY_PERCENTAGE;
use cadence_core::constants::windows::HOURS_PER_DAY;
use cadence_core::models::{DailyLog, Snapshot, TrackingCategory};
use chrono::{NaiveDateTime, Timelike};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Derived progress record for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAnalysis {
    /// Category identifier
    pub category_id: String,
    /// Category display name
    pub category_name: String,
    /// Category display unit
    pub unit: String,
    /// Today's summed value
    pub current_progress: f64,
    /// Daily target
    pub target: f64,
    /// `current / target * 100`, capped at 100 for display
    pub progress_percentage: f64,
    /// `current / target`, uncapped
    pub completion_ratio: f64,
    /// Consecutive days with a positive total
    pub streak: u32,
    /// Direction of the last two weeks
    pub trend: TrendDirection,
    /// Mean daily completion ratio over the completion window, uncapped
    pub average_completion: f64,
    /// Projected days to reach today's target, zero when already met
    pub days_to_complete: u32,
}

impl GoalAnalysis {
    /// Whether today's target has been reached
    #[must_use]
    pub fn is_target_met(&self) -> bool {
        self.completion_ratio >= 1.0
    }

    /// Amount still needed today, never negative
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.target - self.current_progress).max(0.0)
    }
}

/// Aggregate view over all analyses of one call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsOverview {
    /// Number of categories analyzed
    pub total_goals: usize,
    /// Categories whose target is met today
    pub goals_met_today: usize,
    /// Mean display percentage across categories
    pub average_progress_percentage: f64,
    /// Mean of the uncapped average completion ratios
    pub average_completion: f64,
    /// Longest current streak and its category, earliest category on ties
    pub longest_streak: Option<(String, u32)>,
    /// Categories trending up
    pub improving: usize,
    /// Categories trending down
    pub declining: usize,
    /// Categories holding steady
    pub stable: usize,
}

/// Fraction of `target` reached by `current`, zero for a non-positive target
#[must_use]
pub fn completion_ratio(current: f64, target: f64) -> f64 {
    if target > 0.0 && target.is_finite() {
        current / target
    } else {
        0.0
    }
}

/// Project whole days needed to reach `target` at today's hourly rate
///
/// Already met yields zero. A missing rate (nothing logged yet, or the day just
/// started) projects a single day instead of dividing by zero.
#[must_use]
pub fn project_days_to_complete(current: f64, target: f64, hours_elapsed: f64) -> u32 {
    if current >= target {
        return 0;
    }
    if hours_elapsed <= 0.0 {
        return 1;
    }

    let hourly_rate = current / hours_elapsed;
    if hourly_rate <= 0.0 || !hourly_rate.is_finite() {
        return 1;
    }

    let hours_needed = (target - current) / hourly_rate;
    let days = (hours_needed / HOURS_PER_DAY).ceil();
    // Safe: days is a positive finite value bounded by target/rate
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let days = days.min(f64::from(u32::MAX)) as u32;
    days.max(1)
}

/// Hours elapsed since local midnight, with minute precision
#[must_use]
pub fn hours_elapsed_today(now: NaiveDateTime) -> f64 {
    f64::from(now.hour()) + f64::from(now.minute()) / 60.0 + f64::from(now.second()) / 3600.0
}

/// Combines today's totals with the time-series analyzer into `GoalAnalysis` records
#[derive(Debug, Clone, Default)]
pub struct GoalProgressEvaluator {
    analyzer: TimeSeriesAnalyzer,
}

impl GoalProgressEvaluator {
    /// Create an evaluator from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().goal_analysis.clone())
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: GoalAnalysisConfig) -> Self {
        Self {
            analyzer: TimeSeriesAnalyzer::with_config(config),
        }
    }

    /// Analyze every category of the snapshot, preserving category order
    #[must_use]
    pub fn analyze(&self, snapshot: &Snapshot, now: NaiveDateTime) -> Vec<GoalAnalysis> {
        let analyses: Vec<GoalAnalysis> = snapshot
            .categories
            .par_iter()
            .map(|category| self.evaluate_category(category, &snapshot.logs, now))
            .collect();

        debug!(
            categories = analyses.len(),
            logs = snapshot.logs.len(),
            "Analyzed goal progress"
        );
        analyses
    }

    /// Analyze a single category against the (possibly mixed) log collection
    #[must_use]
    pub fn evaluate_category(
        &self,
        category: &TrackingCategory,
        logs: &[DailyLog],
        now: NaiveDateTime,
    ) -> GoalAnalysis {
        let today = now.date();
        let series = DailySeries::from_logs(logs, &category.id);
        let target = category.daily_target;
        let current_progress = series.total_on(today);
        let ratio = completion_ratio(current_progress, target);

        GoalAnalysis {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            unit: category.unit.clone(),
            current_progress,
            target,
            progress_percentage: (ratio * 100.0).clamp(0.0, MAX_DISPLAY_PERCENTAGE),
            completion_ratio: ratio,
            streak: self.analyzer.calculate_streak(&series, today),
            trend: self.analyzer.calculate_trend(&series, today),
            average_completion: self
                .analyzer
                .calculate_average_completion(&series, target, today),
            days_to_complete: project_days_to_complete(
                current_progress,
                target,
                hours_elapsed_today(now),
            ),
        }
    }

    /// Underlying analyzer
    #[must_use]
    pub const fn analyzer(&self) -> &TimeSeriesAnalyzer {
        &self.analyzer
    }
}

/// Roll analyses up into a single overview
#[must_use]
pub fn summarize_goals(analyses: &[GoalAnalysis]) -> GoalsOverview {
    if analyses.is_empty() {
        return GoalsOverview::default();
    }

    #[allow(clippy::cast_precision_loss)] // Safe: category counts are small
    let count = analyses.len() as f64;
    let count_trend = |trend: TrendDirection| analyses.iter().filter(|a| a.trend == trend).count();

    GoalsOverview {
        total_goals: analyses.len(),
        goals_met_today: analyses.iter().filter(|a| a.is_target_met()).count(),
        average_progress_percentage: analyses.iter().map(|a| a.progress_percentage).sum::<f64>()
            / count,
        average_completion: analyses.iter().map(|a| a.average_completion).sum::<f64>() / count,
        longest_streak: analyses
            .iter()
            .filter(|a| a.streak > 0)
            // max_by_key keeps the last maximum; reversed, ties go to the earliest category
            .rev()
            .max_by_key(|a| a.streak)
            .map(|a| (a.category_name.clone(), a.streak)),
        improving: count_trend(TrendDirection::Improving),
        declining: count_trend(TrendDirection::Declining),
        stable: count_trend(TrendDirection::Stable),
    }
}
