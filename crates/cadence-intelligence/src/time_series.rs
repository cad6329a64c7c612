// ABOUTME: Time-series analysis over daily logs: streaks, trend direction, average completion
// ABOUTME: Sums same-day logs per category and walks calendar windows ending at today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Time-Series Analyzer
//!
//! Logs arrive unsorted and several may share a day, so every computation works
//! on a [`DailySeries`]: per-day totals for one category. Windows are counted
//! in calendar days ending at (and including) today; days without logs count
//! as zero. Logs with a non-finite or negative value are skipped.

use crate::config::intelligence::{GoalAnalysisConfig, IntelligenceConfig};
use cadence_core::models::DailyLog;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Coarse direction of recent activity relative to the prior period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Recent half is meaningfully above the older half
    Improving,
    /// Recent half is meaningfully below the older half
    Declining,
    /// Within the threshold either way
    Stable,
}

impl TrendDirection {
    /// Lower-case label used in message text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
        }
    }
}

/// Per-day totals for a single category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    totals: BTreeMap<NaiveDate, f64>,
}

impl DailySeries {
    /// Sum the logs of `category_id` by date, ignoring logs of other categories
    /// and logs whose value is not a finite, non-negative number
    pub fn from_logs<'a, I>(logs: I, category_id: &str) -> Self
    where
        I: IntoIterator<Item = &'a DailyLog>,
    {
        Self::accumulate(logs.into_iter().filter(|log| log.category_id == category_id))
    }

    /// Sum every log by date regardless of category
    pub fn from_all_logs<'a, I>(logs: I) -> Self
    where
        I: IntoIterator<Item = &'a DailyLog>,
    {
        Self::accumulate(logs)
    }

    fn accumulate<'a, I>(logs: I) -> Self
    where
        I: IntoIterator<Item = &'a DailyLog>,
    {
        let mut totals = BTreeMap::new();
        for log in logs {
            if !log.has_valid_value() {
                warn!(log_id = %log.id, value = log.value, "Skipping log with invalid value");
                continue;
            }
            *totals.entry(log.date).or_insert(0.0) += log.value;
        }
        Self { totals }
    }

    /// Total logged on `date`, zero when nothing was logged
    #[must_use]
    pub fn total_on(&self, date: NaiveDate) -> f64 {
        self.totals.get(&date).copied().unwrap_or(0.0)
    }

    /// Days with a positive total inside the `window_days` ending at `today`
    #[must_use]
    pub fn active_days(&self, today: NaiveDate, window_days: u32) -> Vec<(NaiveDate, f64)> {
        window(today, window_days)
            .filter_map(|date| {
                let total = self.total_on(date);
                (total > 0.0).then_some((date, total))
            })
            .collect()
    }

    /// Underlying per-day totals in date order
    #[must_use]
    pub const fn totals(&self) -> &BTreeMap<NaiveDate, f64> {
        &self.totals
    }

    /// Whether no log contributed to the series
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Per-day totals of `category_id` in date order
#[must_use]
pub fn daily_totals(logs: &[DailyLog], category_id: &str) -> BTreeMap<NaiveDate, f64> {
    DailySeries::from_logs(logs, category_id).totals
}

/// Calendar days from `today` backward, `days` long, most recent first
fn window(today: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..u64::from(days)).filter_map(move |offset| today.checked_sub_days(Days::new(offset)))
}

/// Classify the change from `older_mean` to `recent_mean`
///
/// A zero older mean cannot produce a relative change; any positive recent mean
/// is then treated as improving and a zero recent mean as stable.
#[must_use]
pub fn classify_trend(older_mean: f64, recent_mean: f64, threshold: f64) -> TrendDirection {
    if older_mean <= 0.0 {
        return if recent_mean > 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Stable
        };
    }

    let change = (recent_mean - older_mean) / older_mean;
    if change > threshold {
        TrendDirection::Improving
    } else if change < -threshold {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Streak, trend, and completion calculations over a [`DailySeries`]
#[derive(Debug, Clone)]
pub struct TimeSeriesAnalyzer {
    config: GoalAnalysisConfig,
}

impl Default for TimeSeriesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSeriesAnalyzer {
    /// Create an analyzer from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().goal_analysis.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: GoalAnalysisConfig) -> Self {
        Self { config }
    }

    /// Consecutive days with a positive total, ending at or before `today`
    ///
    /// An empty today does not break the streak (the day isn't over), but any
    /// earlier empty day ends it. The walk stops after the streak window.
    #[must_use]
    pub fn calculate_streak(&self, series: &DailySeries, today: NaiveDate) -> u32 {
        let mut streak = 0;
        for (offset, date) in window(today, self.config.streak_window_days).enumerate() {
            if series.total_on(date) > 0.0 {
                streak += 1;
            } else if offset > 0 {
                break;
            }
        }
        streak
    }

    /// Compare the mean of the recent half of the trend window to the older half
    #[must_use]
    pub fn calculate_trend(&self, series: &DailySeries, today: NaiveDate) -> TrendDirection {
        let (older_mean, recent_mean) = self.trend_means(series, today);
        classify_trend(older_mean, recent_mean, self.config.trend_change_threshold)
    }

    /// Means of the older and recent halves of the trend window, missing days as zero
    #[must_use]
    pub fn trend_means(&self, series: &DailySeries, today: NaiveDate) -> (f64, f64) {
        let half = self.config.trend_window_days / 2;
        let days: Vec<f64> = window(today, self.config.trend_window_days)
            .map(|date| series.total_on(date))
            .collect();

        let split = (half as usize).min(days.len());
        let (recent, older) = days.split_at(split);
        (mean(older), mean(recent))
    }

    /// Mean of daily `total / target` ratios over the completion window
    ///
    /// Ratios are not capped, so over-achievement stays visible. A non-positive
    /// target yields zero.
    #[must_use]
    pub fn calculate_average_completion(
        &self,
        series: &DailySeries,
        target: f64,
        today: NaiveDate,
    ) -> f64 {
        if target <= 0.0 || !target.is_finite() {
            return 0.0;
        }

        let ratios: Vec<f64> = window(today, self.config.completion_window_days)
            .map(|date| series.total_on(date) / target)
            .collect();
        mean(&ratios)
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &GoalAnalysisConfig {
        &self.config
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)] // Safe: window lengths are small
    let count = values.len() as f64;
    values.iter().sum::<f64>() / count
}
