// ABOUTME: Workout recommendation scorer ranking catalog templates against an inferred profile
// ABOUTME: Weighted difficulty, goal, duration, and frequency factors with a safe fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Workout Recommendation Scorer
//!
//! Each catalog template is scored against a [`FitnessProfileSnapshot`]:
//!
//! ```text
//! score = w_difficulty * level_match
//!       + w_goals      * shared_goals / template_goals
//!       + w_duration   * max(0, 1 - |duration - typical| / typical)
//!       + w_bonus      * frequency_bonus
//! ```
//!
//! Templates above the minimum score are returned best first. Scoring never
//! mutates the catalog; recommendations are enriched clones.

pub mod catalog;
pub mod profile;
pub mod reasoning;

pub use catalog::{
    find_template, workout_catalog, Difficulty, Exercise, GoalTag, WorkoutRecommendation,
    WorkoutType, BEGINNER_BODYWEIGHT_ID,
};
pub use profile::{extract_goals, infer_profile, FitnessProfileSnapshot};
pub use reasoning::{DifficultyMatch, ScoreBreakdown};

use crate::config::intelligence::{IntelligenceConfig, WorkoutScoringConfig};
use cadence_core::errors::{AppError, AppResult};
use cadence_core::models::Snapshot;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Confidence assigned to the fallback recommendation
const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Ranks catalog templates for a user
#[derive(Debug, Clone)]
pub struct WorkoutRecommender {
    config: WorkoutScoringConfig,
}

impl Default for WorkoutRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutRecommender {
    /// Create a recommender from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().workout.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: WorkoutScoringConfig) -> Self {
        Self { config }
    }

    /// Top recommendations for the snapshot, or the fallback when scoring fails
    #[must_use]
    pub fn recommend(&self, snapshot: &Snapshot, now: NaiveDateTime) -> Vec<WorkoutRecommendation> {
        match self.try_recommend(snapshot, now) {
            Ok(recommendations) => recommendations,
            Err(e) => {
                warn!(error = %e, "Workout scoring failed, returning fallback recommendation");
                vec![fallback_recommendation()]
            }
        }
    }

    /// Top recommendations for the snapshot
    ///
    /// # Errors
    ///
    /// Returns an error when the profile cannot be inferred from the logs
    pub fn try_recommend(
        &self,
        snapshot: &Snapshot,
        now: NaiveDateTime,
    ) -> AppResult<Vec<WorkoutRecommendation>> {
        let profile = self.infer_profile(snapshot, now)?;
        let recommendations = self.rank(&profile)?;

        debug!(
            level = %profile.fitness_level,
            goals = profile.goals.len(),
            returned = recommendations.len(),
            "Generated workout recommendations"
        );
        Ok(recommendations)
    }

    /// The scorer's view of the user
    ///
    /// # Errors
    ///
    /// Returns an error when a log value is not a finite number
    pub fn infer_profile(
        &self,
        snapshot: &Snapshot,
        now: NaiveDateTime,
    ) -> AppResult<FitnessProfileSnapshot> {
        infer_profile(
            snapshot,
            now.date(),
            &self.config.level_inference,
            &self.config.activity,
        )
    }

    /// Score every template and keep the best
    ///
    /// # Errors
    ///
    /// Returns an error if a score is not a finite number
    pub fn rank(&self, profile: &FitnessProfileSnapshot) -> AppResult<Vec<WorkoutRecommendation>> {
        let mut scored = Vec::new();
        for template in workout_catalog() {
            let breakdown = self.score(template, profile);
            let score = breakdown.total();
            if !score.is_finite() {
                return Err(AppError::internal(format!(
                    "Non-finite score for workout template {}",
                    template.id
                )));
            }
            if score > self.config.limits.min_score {
                let mut recommendation = template.clone();
                recommendation.confidence_score = score.min(1.0);
                recommendation.reasoning =
                    reasoning::build_reasoning(template, profile, &breakdown);
                scored.push(recommendation);
            }
        }

        scored.sort_by(|a, b| b.confidence_score.total_cmp(&a.confidence_score));
        scored.truncate(self.config.limits.max_recommendations);
        Ok(scored)
    }

    /// Weighted factor contributions for one template
    #[must_use]
    pub fn score(
        &self,
        template: &WorkoutRecommendation,
        profile: &FitnessProfileSnapshot,
    ) -> ScoreBreakdown {
        let weights = &self.config.weights;
        let activity = &self.config.activity;

        let (difficulty_match, difficulty_score) = if template.difficulty == profile.fitness_level {
            (DifficultyMatch::Exact, weights.difficulty)
        } else if template.difficulty.is_adjacent(profile.fitness_level) {
            (DifficultyMatch::Adjacent, weights.adjacent_difficulty)
        } else {
            (DifficultyMatch::Mismatch, 0.0)
        };

        let shared_goals: Vec<GoalTag> = template
            .fitness_goals
            .iter()
            .filter(|goal| profile.goals.contains(*goal))
            .copied()
            .collect();
        #[allow(clippy::cast_precision_loss)] // Safe: goal lists are tiny
        let goal_fraction = if template.fitness_goals.is_empty() {
            0.0
        } else {
            shared_goals.len() as f64 / template.fitness_goals.len() as f64
        };

        let duration_fit = duration_fit(f64::from(template.duration), profile.typical_session_minutes);

        let frequency_bonus = (template.workout_type == WorkoutType::Flexibility
            && profile.weekly_sessions >= activity.high_frequency_sessions)
            || (template.difficulty == Difficulty::Beginner
                && profile.weekly_sessions < activity.low_frequency_sessions);

        ScoreBreakdown {
            difficulty_match,
            difficulty_score,
            shared_goals,
            goal_score: weights.goals * goal_fraction,
            duration_fit,
            duration_score: weights.duration * duration_fit,
            frequency_bonus,
            bonus_score: if frequency_bonus { weights.bonus } else { 0.0 },
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &WorkoutScoringConfig {
        &self.config
    }
}

/// `1 - |duration - typical| / typical`, floored at zero
#[must_use]
pub fn duration_fit(duration: f64, typical: f64) -> f64 {
    if typical <= 0.0 || !typical.is_finite() {
        return 0.0;
    }
    (1.0 - (duration - typical).abs() / typical).max(0.0)
}

/// Clearly labelled beginner bodyweight session returned when scoring fails
#[must_use]
pub fn fallback_recommendation() -> WorkoutRecommendation {
    let mut recommendation = find_template(BEGINNER_BODYWEIGHT_ID).cloned().unwrap_or_else(|| {
        WorkoutRecommendation {
            id: BEGINNER_BODYWEIGHT_ID.to_owned(),
            title: "Bodyweight Basics".to_owned(),
            description: "A gentle full-body circuit.".to_owned(),
            difficulty: Difficulty::Beginner,
            duration: 20,
            calories_estimate: 120,
            equipment_needed: Vec::new(),
            fitness_goals: vec![GoalTag::GeneralFitness],
            body_parts: vec!["full body".to_owned()],
            workout_type: WorkoutType::Strength,
            exercises: Vec::new(),
            confidence_score: 0.0,
            reasoning: String::new(),
        }
    });
    recommendation.confidence_score = FALLBACK_CONFIDENCE;
    recommendation.reasoning = "General recommendation: we couldn't personalize workouts from your recent activity, so here's an approachable full-body session anyone can start with.".to_owned();
    recommendation
}
