// ABOUTME: Motivational message generator producing prioritized reminders, encouragement, and tips
// ABOUTME: Runs five rule-based generators over goal analyses, then ranks and truncates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Motivational Message Generator
//!
//! Five independent generators contribute messages:
//!
//! 1. Time-based reminders gated by hour-of-day bands and today's progress
//! 2. Contextual encouragement from average completion and trend
//! 3. Celebrations for today's target and streak milestones
//! 4. Challenges for over-performers and mid-range streaks
//! 5. Tips for categories below the completion ceiling
//!
//! The combined list is stably sorted by priority weight then timestamp, and
//! truncated. Output is never empty: an onboarding message replaces the
//! generators when there is nothing to analyze, and a default encouragement
//! is emitted when no rule fires.

mod templates;
pub mod tips;

use crate::config::intelligence::{GoalAnalysisConfig, IntelligenceConfig, MotivationConfig};
use crate::goal_progress::{GoalAnalysis, GoalProgressEvaluator};
use crate::time_series::TrendDirection;
use cadence_core::models::Snapshot;
use chrono::{NaiveDateTime, Timelike};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use templates::MessageTemplate;
use tracing::debug;
use uuid::Uuid;

/// Kind of motivational message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Time-of-day nudge
    Reminder,
    /// Supportive note about recent performance
    Encouragement,
    /// Invitation to stretch further
    Challenge,
    /// Achievement acknowledgement
    Celebration,
    /// Practical habit advice
    Tip,
}

impl MessageType {
    /// Lower-case label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reminder => "reminder",
            Self::Encouragement => "encouragement",
            Self::Challenge => "challenge",
            Self::Celebration => "celebration",
            Self::Tip => "tip",
        }
    }
}

/// Message priority used for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessagePriority {
    /// Weight 1
    Low,
    /// Weight 2
    Medium,
    /// Weight 3
    High,
}

impl MessagePriority {
    /// Ranking weight, higher first
    #[must_use]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// A rendered, prioritized message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationalMessage {
    /// Unique within one generation, stable across identical calls
    pub id: Uuid,
    /// Message kind
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Ranking priority
    pub priority: MessagePriority,
    /// Category name the message is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the message suggests a concrete action
    pub actionable: bool,
    /// The suggested action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<String>,
    /// Generation instant
    pub timestamp: NaiveDateTime,
}

/// Seed a reproducible randomness source from the generation instant
#[must_use]
pub fn seeded_rng(now: NaiveDateTime) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(now.and_utc().timestamp().unsigned_abs())
}

/// Message accumulator for one generation
struct MessageBatch<'a> {
    name: &'a str,
    now: NaiveDateTime,
    messages: Vec<MotivationalMessage>,
}

impl<'a> MessageBatch<'a> {
    const fn new(name: &'a str, now: NaiveDateTime) -> Self {
        Self {
            name,
            now,
            messages: Vec::new(),
        }
    }

    /// Append a message; `rule` keys the deterministic id
    fn push(
        &mut self,
        rule: &str,
        message_type: MessageType,
        priority: MessagePriority,
        category: Option<&GoalAnalysis>,
        template: MessageTemplate,
    ) {
        let category_id = category.map_or("", |a| a.category_id.as_str());
        let key = format!("{rule}:{category_id}:{}", self.now);
        self.messages.push(MotivationalMessage {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()),
            message_type,
            title: template.title,
            message: template.message,
            priority,
            category: category.map(|a| a.category_name.clone()),
            actionable: template.suggested_action.is_some(),
            suggested_action: template.suggested_action,
            timestamp: self.now,
        });
    }
}

/// Generates prioritized motivational messages
#[derive(Debug, Clone)]
pub struct MotivationEngine {
    config: MotivationConfig,
    evaluator: GoalProgressEvaluator,
}

impl Default for MotivationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotivationEngine {
    /// Create an engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let config = IntelligenceConfig::global();
        Self::with_config(config.motivation.clone(), config.goal_analysis.clone())
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: MotivationConfig, analysis: GoalAnalysisConfig) -> Self {
        Self {
            config,
            evaluator: GoalProgressEvaluator::with_config(analysis),
        }
    }

    /// Generate messages with tip selection seeded from `now`
    #[must_use]
    pub fn generate(&self, snapshot: &Snapshot, now: NaiveDateTime) -> Vec<MotivationalMessage> {
        self.generate_with_rng(snapshot, now, &mut seeded_rng(now))
    }

    /// Generate messages with an injected randomness source for tip selection
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        snapshot: &Snapshot,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<MotivationalMessage> {
        if snapshot.profile.is_none() || snapshot.categories.is_empty() {
            debug!("No profile or categories, returning onboarding message");
            let mut batch = MessageBatch::new(snapshot.display_name(), now);
            batch.push(
                "onboarding",
                MessageType::Encouragement,
                MessagePriority::High,
                None,
                templates::onboarding(snapshot.display_name()),
            );
            return batch.messages;
        }

        let analyses = self.evaluator.analyze(snapshot, now);
        self.generate_from_analyses(&analyses, snapshot.display_name(), now, rng)
    }

    /// Run the generators over precomputed analyses
    pub fn generate_from_analyses<R: Rng + ?Sized>(
        &self,
        analyses: &[GoalAnalysis],
        name: &str,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<MotivationalMessage> {
        let mut batch = MessageBatch::new(name, now);
        let hour = now.hour();

        for analysis in analyses {
            self.add_reminders(&mut batch, analysis, hour);
        }
        for analysis in analyses {
            self.add_encouragement(&mut batch, analysis);
        }
        for analysis in analyses {
            self.add_celebrations(&mut batch, analysis);
        }
        for analysis in analyses {
            self.add_challenges(&mut batch, analysis);
        }
        for analysis in analyses {
            self.add_tip(&mut batch, analysis, rng);
        }

        if batch.messages.is_empty() {
            batch.push(
                "keep_going",
                MessageType::Encouragement,
                MessagePriority::Medium,
                None,
                templates::keep_going(name),
            );
        }

        let generated = batch.messages.len();
        let messages = self.rank(batch.messages);
        debug!(
            generated,
            returned = messages.len(),
            "Generated motivational messages"
        );
        messages
    }

    fn add_reminders(&self, batch: &mut MessageBatch<'_>, analysis: &GoalAnalysis, hour: u32) {
        let bands = &self.config.time_bands;
        let thresholds = &self.config.thresholds;
        let progress = analysis.progress_percentage;

        if bands.morning.contains(hour) && analysis.current_progress <= 0.0 {
            let template = templates::morning_kickoff(batch.name, analysis);
            batch.push(
                "reminder.morning",
                MessageType::Reminder,
                MessagePriority::Medium,
                Some(analysis),
                template,
            );
        } else if bands.midday.contains(hour) && progress < thresholds.midday_progress_ceiling {
            let template = templates::midday_check_in(batch.name, analysis);
            batch.push(
                "reminder.midday",
                MessageType::Reminder,
                MessagePriority::Medium,
                Some(analysis),
                template,
            );
        } else if bands.evening.contains(hour)
            && progress > 0.0
            && progress < thresholds.evening_progress_ceiling
        {
            let template = templates::evening_push(batch.name, analysis);
            batch.push(
                "reminder.evening",
                MessageType::Reminder,
                MessagePriority::High,
                Some(analysis),
                template,
            );
        }
    }

    fn add_encouragement(&self, batch: &mut MessageBatch<'_>, analysis: &GoalAnalysis) {
        let thresholds = &self.config.thresholds;
        let average = analysis.average_completion;

        if average < thresholds.struggling_completion && analysis.trend == TrendDirection::Declining
        {
            let template = templates::struggling(batch.name, analysis);
            batch.push(
                "encouragement.struggling",
                MessageType::Encouragement,
                MessagePriority::High,
                Some(analysis),
                template,
            );
        } else if (thresholds.struggling_completion..thresholds.moderate_completion_ceiling)
            .contains(&average)
        {
            let template = templates::getting_there(batch.name, analysis);
            batch.push(
                "encouragement.moderate",
                MessageType::Encouragement,
                MessagePriority::Low,
                Some(analysis),
                template,
            );
        }

        if analysis.streak == 0 && average > thresholds.strong_history_completion {
            let template = templates::comeback(batch.name, analysis);
            batch.push(
                "encouragement.comeback",
                MessageType::Encouragement,
                MessagePriority::Medium,
                Some(analysis),
                template,
            );
        }
    }

    fn add_celebrations(&self, batch: &mut MessageBatch<'_>, analysis: &GoalAnalysis) {
        let milestones = &self.config.milestones;

        if analysis.target > 0.0 && analysis.is_target_met() {
            let template = templates::goal_crushed(batch.name, analysis);
            batch.push(
                "celebration.goal",
                MessageType::Celebration,
                MessagePriority::High,
                Some(analysis),
                template,
            );
        }

        if analysis.streak == milestones.week {
            let template = templates::one_week_warrior(batch.name, analysis);
            batch.push(
                "celebration.week",
                MessageType::Celebration,
                MessagePriority::High,
                Some(analysis),
                template,
            );
        } else if analysis.streak == milestones.month {
            let template = templates::monthly_master(batch.name, analysis);
            batch.push(
                "celebration.month",
                MessageType::Celebration,
                MessagePriority::High,
                Some(analysis),
                template,
            );
        }
    }

    fn add_challenges(&self, batch: &mut MessageBatch<'_>, analysis: &GoalAnalysis) {
        let milestones = &self.config.milestones;

        if analysis.average_completion > self.config.thresholds.overachiever_completion
            && analysis.trend == TrendDirection::Improving
        {
            let template = templates::level_up(batch.name, analysis);
            batch.push(
                "challenge.level_up",
                MessageType::Challenge,
                MessagePriority::Medium,
                Some(analysis),
                template,
            );
        }

        if (milestones.week..milestones.month).contains(&analysis.streak) {
            let next = if analysis.streak < milestones.fortnight {
                milestones.fortnight
            } else {
                milestones.month
            };
            let template = templates::streak_challenge(batch.name, analysis, next);
            batch.push(
                "challenge.streak",
                MessageType::Challenge,
                MessagePriority::Medium,
                Some(analysis),
                template,
            );
        }
    }

    fn add_tip<R: Rng + ?Sized>(
        &self,
        batch: &mut MessageBatch<'_>,
        analysis: &GoalAnalysis,
        rng: &mut R,
    ) {
        if analysis.average_completion >= self.config.thresholds.tip_completion_ceiling {
            return;
        }
        let Some(tip) = tips::choose_tip(&analysis.category_name, rng) else {
            return;
        };

        let template = MessageTemplate {
            title: tip.title.to_owned(),
            message: tip.message.to_owned(),
            suggested_action: Some(tip.suggested_action.to_owned()),
        };
        batch.push(
            "tip",
            MessageType::Tip,
            MessagePriority::Low,
            Some(analysis),
            template,
        );
    }

    /// Stable sort by priority weight then timestamp, both descending, then truncate
    fn rank(&self, mut messages: Vec<MotivationalMessage>) -> Vec<MotivationalMessage> {
        messages.sort_by(|a, b| {
            b.priority
                .weight()
                .cmp(&a.priority.weight())
                .then_with(|| b.timestamp.cmp(&a.timestamp))
        });
        messages.truncate(self.config.limits.max_messages);
        messages
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &MotivationConfig {
        &self.config
    }
}
