// ABOUTME: User profile model with body metrics and a closed set of fitness goals
// ABOUTME: Read-mostly input to the workout and nutrition recommendation components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use serde::{Deserialize, Serialize};

/// Primary fitness goal chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Reduce body weight
    #[serde(alias = "weight_loss")]
    LoseWeight,
    /// Increase body weight
    GainWeight,
    /// Build muscle mass
    #[serde(alias = "muscle_gain")]
    BuildMuscle,
    /// Improve cardiovascular endurance
    ImproveEndurance,
    /// Maintain general health
    #[default]
    MaintainHealth,
    /// Anything else, usually described in free text
    Other,
}

impl FitnessGoal {
    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainWeight => "gain_weight",
            Self::BuildMuscle => "build_muscle",
            Self::ImproveEndurance => "improve_endurance",
            Self::MaintainHealth => "maintain_health",
            Self::Other => "other",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose weight",
            Self::GainWeight => "gain weight",
            Self::BuildMuscle => "build muscle",
            Self::ImproveEndurance => "improve endurance",
            Self::MaintainHealth => "maintain health",
            Self::Other => "reach your personal goal",
        }
    }
}

/// Self-reported gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

/// Profile of the user whose data is being analyzed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Opaque identifier
    pub id: String,
    /// Display name interpolated into messages
    pub name: String,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Self-reported gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Primary fitness goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
    /// Free-text elaboration of the goal ("beginner runner training for 10k")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_description: Option<String>,
}

impl UserProfile {
    /// Create a profile with only identity fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: None,
            gender: None,
            weight: None,
            height: None,
            fitness_goal: None,
            goal_description: None,
        }
    }

    /// Set body weight in kilograms
    #[must_use]
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight = Some(weight_kg);
        self
    }

    /// Set the fitness goal
    #[must_use]
    pub fn with_goal(mut self, goal: FitnessGoal) -> Self {
        self.fitness_goal = Some(goal);
        self
    }

    /// Set the free-text goal description
    #[must_use]
    pub fn with_goal_description(mut self, description: impl Into<String>) -> Self {
        self.goal_description = Some(description.into());
        self
    }

    /// Goal and description joined into lower-case text for keyword matching
    #[must_use]
    pub fn goal_text(&self) -> String {
        let goal = self.fitness_goal.map_or("", |goal| goal.as_str());
        let description = self.goal_description.as_deref().unwrap_or("");
        format!("{goal} {description}").trim().to_lowercase()
    }
}
