// ABOUTME: Goal adjustment advisor proposing higher or lower daily targets with confidence
// ABOUTME: Evaluates increase then decrease rules per analysis and keeps confident suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use crate::config::intelligence::{
    GoalAdjustmentConfig, GoalAnalysisConfig, IntelligenceConfig,
};
use crate::goal_progress::{GoalAnalysis, GoalProgressEvaluator};
use crate::time_series::TrendDirection;
use cadence_core::models::Snapshot;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction of a proposed change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentType {
    /// Raise the target
    Increase,
    /// Lower the target
    Decrease,
}

/// A proposed new daily target for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAdjustmentSuggestion {
    /// Category the suggestion applies to
    pub category_id: String,
    /// Target in effect today
    pub current_target: f64,
    /// Proposed target
    pub suggested_target: f64,
    /// Human-readable justification
    pub reason: String,
    /// Support for the suggestion in `[0, 1]`
    pub confidence: f64,
    /// Whether the target goes up or down
    pub adjustment_type: AdjustmentType,
}

/// Proposes target adjustments from goal analyses
#[derive(Debug, Clone)]
pub struct GoalAdjustmentAdvisor {
    config: GoalAdjustmentConfig,
    evaluator: GoalProgressEvaluator,
}

impl Default for GoalAdjustmentAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalAdjustmentAdvisor {
    /// Create an advisor from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let config = IntelligenceConfig::global();
        Self::with_config(config.goal_adjustment.clone(), config.goal_analysis.clone())
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: GoalAdjustmentConfig, analysis: GoalAnalysisConfig) -> Self {
        Self {
            config,
            evaluator: GoalProgressEvaluator::with_config(analysis),
        }
    }

    /// Analyze the snapshot and return confident suggestions, most confident first
    #[must_use]
    pub fn generate(&self, snapshot: &Snapshot, now: NaiveDateTime) -> Vec<GoalAdjustmentSuggestion> {
        let analyses = self.evaluator.analyze(snapshot, now);
        self.suggest(&analyses)
    }

    /// Suggestions from precomputed analyses, filtered by confidence and sorted descending
    #[must_use]
    pub fn suggest(&self, analyses: &[GoalAnalysis]) -> Vec<GoalAdjustmentSuggestion> {
        let mut suggestions: Vec<GoalAdjustmentSuggestion> = analyses
            .iter()
            .filter_map(|analysis| self.evaluate(analysis))
            .filter(|suggestion| suggestion.confidence > self.config.min_confidence)
            .collect();

        suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        debug!(
            analyzed = analyses.len(),
            suggested = suggestions.len(),
            "Generated goal adjustments"
        );
        suggestions
    }

    /// First matching rule for one analysis, before the confidence filter
    #[must_use]
    pub fn evaluate(&self, analysis: &GoalAnalysis) -> Option<GoalAdjustmentSuggestion> {
        if analysis.target <= 0.0 || !analysis.target.is_finite() {
            return None;
        }
        self.increase(analysis).or_else(|| self.decrease(analysis))
    }

    fn increase(&self, analysis: &GoalAnalysis) -> Option<GoalAdjustmentSuggestion> {
        let rule = &self.config.increase;
        let average = analysis.average_completion;
        if average <= rule.min_average_completion
            || analysis.trend != TrendDirection::Improving
            || analysis.streak < rule.min_streak_days
        {
            return None;
        }

        let fraction = rule.max_increase_fraction.min(average - 1.0);
        let suggested_target = analysis.target + (analysis.target * fraction).round();
        let confidence = rule
            .max_confidence
            .min(rule.base_confidence + (average - rule.min_average_completion) * rule.confidence_slope);

        Some(GoalAdjustmentSuggestion {
            category_id: analysis.category_id.clone(),
            current_target: analysis.target,
            suggested_target,
            reason: format!(
                "You've averaged {:.0}% of your {} target with a {}-day streak and an improving trend. Time to raise the bar.",
                average * 100.0,
                analysis.category_name.to_lowercase(),
                analysis.streak
            ),
            confidence,
            adjustment_type: AdjustmentType::Increase,
        })
    }

    fn decrease(&self, analysis: &GoalAnalysis) -> Option<GoalAdjustmentSuggestion> {
        let rule = &self.config.decrease;
        let average = analysis.average_completion;
        if average >= rule.max_average_completion || analysis.trend != TrendDirection::Declining {
            return None;
        }

        let fraction = rule.min_decrease_fraction.max(rule.decrease_pivot - average);
        let suggested_target = rule
            .min_target
            .max(analysis.target - (analysis.target * fraction).round());
        let confidence = rule
            .max_confidence
            .min(rule.base_confidence + (rule.max_average_completion - average) * rule.confidence_slope);

        Some(GoalAdjustmentSuggestion {
            category_id: analysis.category_id.clone(),
            current_target: analysis.target,
            suggested_target,
            reason: format!(
                "You've averaged {:.0}% of your {} target and the trend is declining. A smaller target keeps the habit alive.",
                average * 100.0,
                analysis.category_name.to_lowercase()
            ),
            confidence,
            adjustment_type: AdjustmentType::Decrease,
        })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &GoalAdjustmentConfig {
        &self.config
    }
}
