// ABOUTME: Nutrition recommendation generator producing a meal plan, tips, and a featured recipe
// ABOUTME: Deterministic per profile, with population defaults and a hydration-tip fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Nutrition Recommendation Generator
//!
//! Output order is fixed: one meal plan, up to two goal tips (topped up with a
//! hydration tip when the goal has fewer), then one featured recipe. Missing
//! profile fields fall back to population defaults; invalid numeric input
//! yields the single hydration fallback tip instead of an error.

pub mod content;
pub mod meal_plan;

pub use meal_plan::{build_meal_plan, calorie_factor, macro_grams, target_calories};

use crate::config::intelligence::{IntelligenceConfig, MacroDistribution, NutritionConfig};
use cadence_core::constants::limits::MAX_NUTRITION_TIPS;
use cadence_core::errors::{AppError, AppResult};
use cadence_core::models::{FitnessGoal, MealType, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Grams of each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroGrams {
    /// Protein in grams
    pub protein_grams: f64,
    /// Carbohydrates in grams
    pub carbs_grams: f64,
    /// Fat in grams
    pub fat_grams: f64,
}

/// One meal slot of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    /// Meal slot
    pub meal_type: MealType,
    /// Calories for the meal
    pub calories: u32,
    /// Percentage split of the meal's calories
    pub macros: MacroDistribution,
    /// Macro grams derived from calories and split
    pub grams: MacroGrams,
    /// Example dish
    pub suggestion: String,
}

/// Daily meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Plan identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Goal the plan was built for
    pub goal: FitnessGoal,
    /// Daily calorie target
    pub target_calories: u32,
    /// Meals in serving order
    pub meals: Vec<PlannedMeal>,
    /// Summed macro grams across meals
    pub total_grams: MacroGrams,
}

/// Subject of a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipTopic {
    /// Fluids and electrolytes
    Hydration,
    /// Protein intake
    Protein,
    /// Fiber and food volume
    Fiber,
    /// Meal timing around training
    Timing,
    /// Energy intake
    Calories,
    /// Food variety
    Variety,
}

/// A nutrition tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTip {
    /// Tip identifier
    pub id: String,
    /// Subject
    pub topic: TipTopic,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
}

/// A featured recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Goal the recipe was chosen for
    pub goal: FitnessGoal,
    /// Preparation time in minutes
    pub prep_minutes: u32,
    /// Calories per serving
    pub calories_per_serving: u32,
    /// Protein per serving in grams
    pub protein_grams: f64,
    /// Ingredient list
    pub ingredients: Vec<String>,
    /// Ordered steps
    pub instructions: Vec<String>,
}

/// One nutrition recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NutritionRecommendation {
    /// Daily meal plan
    MealPlan(MealPlan),
    /// Practical tip
    Tip(NutritionTip),
    /// Featured recipe
    Recipe(Recipe),
}

impl NutritionRecommendation {
    /// The meal plan, if this is one
    #[must_use]
    pub const fn as_meal_plan(&self) -> Option<&MealPlan> {
        match self {
            Self::MealPlan(plan) => Some(plan),
            _ => None,
        }
    }

    /// The tip, if this is one
    #[must_use]
    pub const fn as_tip(&self) -> Option<&NutritionTip> {
        match self {
            Self::Tip(tip) => Some(tip),
            _ => None,
        }
    }
}

/// Generates nutrition recommendations from profile attributes
#[derive(Debug, Clone)]
pub struct NutritionAdvisor {
    config: NutritionConfig,
}

impl Default for NutritionAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionAdvisor {
    /// Create an advisor from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().nutrition.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: NutritionConfig) -> Self {
        Self { config }
    }

    /// Recommendations for a profile, or the hydration fallback on failure
    #[must_use]
    pub fn recommend(&self, profile: Option<&UserProfile>) -> Vec<NutritionRecommendation> {
        match self.try_recommend(profile) {
            Ok(recommendations) => recommendations,
            Err(e) => {
                warn!(error = %e, "Nutrition generation failed, returning hydration tip");
                vec![NutritionRecommendation::Tip(self.fallback_tip())]
            }
        }
    }

    /// Recommendations for a profile
    ///
    /// # Errors
    ///
    /// Returns an error when the profile weight is not a positive finite number
    pub fn try_recommend(
        &self,
        profile: Option<&UserProfile>,
    ) -> AppResult<Vec<NutritionRecommendation>> {
        let weight_kg = self.resolve_weight(profile)?;
        let goal = profile
            .and_then(|p| p.fitness_goal)
            .unwrap_or_default();

        let mut recommendations = vec![NutritionRecommendation::MealPlan(build_meal_plan(
            weight_kg,
            goal,
            &self.config,
        ))];
        recommendations.extend(
            self.tips(weight_kg, goal)
                .into_iter()
                .map(NutritionRecommendation::Tip),
        );
        recommendations.push(NutritionRecommendation::Recipe(content::featured_recipe(goal)));

        debug!(
            goal = goal.as_str(),
            weight_kg,
            count = recommendations.len(),
            "Generated nutrition recommendations"
        );
        Ok(recommendations)
    }

    /// Goal tips capped at two, topped up with hydration
    #[must_use]
    pub fn tips(&self, weight_kg: f64, goal: FitnessGoal) -> Vec<NutritionTip> {
        let mut tips = content::goal_tips(goal);
        tips.truncate(MAX_NUTRITION_TIPS);
        if tips.len() < MAX_NUTRITION_TIPS {
            tips.push(content::hydration_tip(
                weight_kg,
                self.config.defaults.hydration_ml_per_kg,
            ));
        }
        tips
    }

    /// Hydration tip at the default weight, clearly labelled as general advice
    #[must_use]
    pub fn fallback_tip(&self) -> NutritionTip {
        let mut tip = content::hydration_tip(
            self.config.defaults.weight_kg,
            self.config.defaults.hydration_ml_per_kg,
        );
        tip.id = "tip-hydration-fallback".to_owned();
        tip.title = "General Tip: Stay Hydrated".to_owned();
        tip
    }

    fn resolve_weight(&self, profile: Option<&UserProfile>) -> AppResult<f64> {
        match profile.and_then(|p| p.weight) {
            None => Ok(self.config.defaults.weight_kg),
            Some(weight) if weight.is_finite() && weight > 0.0 => Ok(weight),
            Some(weight) => Err(AppError::out_of_range(format!(
                "Profile weight must be a positive number, got {weight}"
            ))),
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }
}
