// ABOUTME: Deterministic explanation text for scored workout recommendations
// ABOUTME: One sentence per contributing factor, in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use super::catalog::{Difficulty, GoalTag, WorkoutRecommendation, WorkoutType};
use super::profile::FitnessProfileSnapshot;
use serde::{Deserialize, Serialize};

/// How a template's difficulty relates to the user's level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyMatch {
    /// Same level
    Exact,
    /// One level away
    Adjacent,
    /// Two levels away
    Mismatch,
}

/// Per-factor contributions behind a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Difficulty relationship
    pub difficulty_match: DifficultyMatch,
    /// Weighted difficulty contribution
    pub difficulty_score: f64,
    /// Template goals the user shares
    pub shared_goals: Vec<GoalTag>,
    /// Weighted goal contribution
    pub goal_score: f64,
    /// Unweighted duration fit in `[0, 1]`
    pub duration_fit: f64,
    /// Weighted duration contribution
    pub duration_score: f64,
    /// Whether the frequency bonus applied
    pub frequency_bonus: bool,
    /// Weighted bonus contribution
    pub bonus_score: f64,
}

impl ScoreBreakdown {
    /// Sum of the weighted contributions
    #[must_use]
    pub fn total(&self) -> f64 {
        self.difficulty_score + self.goal_score + self.duration_score + self.bonus_score
    }
}

/// Duration fit at or above this earns a sentence
const GOOD_DURATION_FIT: f64 = 0.75;

fn join_labels(goals: &[GoalTag]) -> String {
    let labels: Vec<&str> = goals.iter().map(GoalTag::label).collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

fn level_sentence(
    workout: &WorkoutRecommendation,
    profile: &FitnessProfileSnapshot,
    matched: DifficultyMatch,
) -> Option<String> {
    let level = profile.fitness_level;
    match matched {
        DifficultyMatch::Exact => Some(format!("Matches your {level} fitness level.")),
        DifficultyMatch::Adjacent if workout.difficulty > level => Some(format!(
            "A step up from your {level} level to keep you progressing."
        )),
        DifficultyMatch::Adjacent => Some(format!(
            "A lighter option than your usual {level} training, good for recovery days."
        )),
        DifficultyMatch::Mismatch => None,
    }
}

fn frequency_sentence(
    workout: &WorkoutRecommendation,
    profile: &FitnessProfileSnapshot,
) -> Option<String> {
    if workout.workout_type == WorkoutType::Flexibility {
        Some(format!(
            "With about {:.1} sessions a week, a mobility day helps you recover.",
            profile.weekly_sessions
        ))
    } else if workout.difficulty == Difficulty::Beginner {
        Some("An approachable session to build a regular routine.".to_owned())
    } else {
        None
    }
}

/// Explain a score from its contributing factors
#[must_use]
pub fn build_reasoning(
    workout: &WorkoutRecommendation,
    profile: &FitnessProfileSnapshot,
    breakdown: &ScoreBreakdown,
) -> String {
    let mut sentences: Vec<String> = Vec::new();

    if let Some(sentence) = level_sentence(workout, profile, breakdown.difficulty_match) {
        sentences.push(sentence);
    }

    if !breakdown.shared_goals.is_empty() {
        sentences.push(format!(
            "Supports your {} goals.",
            join_labels(&breakdown.shared_goals)
        ));
    }

    if breakdown.duration_fit >= GOOD_DURATION_FIT {
        sentences.push(format!(
            "At {} minutes it fits your usual {:.0}-minute sessions.",
            workout.duration, profile.typical_session_minutes
        ));
    }

    if workout.equipment_needed.is_empty() {
        sentences.push("No equipment needed, so you can do it anywhere.".to_owned());
    }

    if breakdown.frequency_bonus {
        if let Some(sentence) = frequency_sentence(workout, profile) {
            sentences.push(sentence);
        }
    }

    if sentences.is_empty() {
        return "A well-rounded session to keep you moving.".to_owned();
    }
    sentences.join(" ")
}
