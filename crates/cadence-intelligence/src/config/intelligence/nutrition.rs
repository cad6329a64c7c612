// ABOUTME: Nutrition recommendation configuration for calorie targets and meal splits
// ABOUTME: Calories-per-kg factors by goal, meal calorie shares, and per-meal macro percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Nutrition Configuration
//!
//! Daily calories are body weight times a goal-dependent factor. Each meal gets a
//! fixed share of those calories and a fixed protein/carbs/fat percentage split.

use super::ConfigError;
use cadence_core::constants::defaults::DEFAULT_WEIGHT_KG;
use cadence_core::constants::nutrition::HYDRATION_ML_PER_KG;
use serde::{Deserialize, Serialize};

/// Nutrition recommendation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Calories per kilogram of body weight by goal
    pub calorie_factors: CalorieFactorsConfig,
    /// Share of daily calories per meal
    pub meal_shares: MealCalorieShares,
    /// Macro split per meal
    pub meal_macros: MealMacroSplits,
    /// Population defaults
    pub defaults: NutritionDefaults,
}

/// Calories per kilogram of body weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieFactorsConfig {
    /// Factor for weight loss
    pub weight_loss: f64,
    /// Factor for muscle or weight gain
    pub muscle_gain: f64,
    /// Factor for every other goal
    pub maintenance: f64,
}

impl Default for CalorieFactorsConfig {
    fn default() -> Self {
        Self {
            weight_loss: 22.0,
            muscle_gain: 28.0,
            maintenance: 25.0,
        }
    }
}

/// Fraction of daily calories assigned to each meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCalorieShares {
    /// Breakfast share
    pub breakfast: f64,
    /// Lunch share
    pub lunch: f64,
    /// Dinner share
    pub dinner: f64,
    /// Snack share
    pub snack: f64,
}

impl Default for MealCalorieShares {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

impl MealCalorieShares {
    /// Shares must sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns an error if a share is negative or the shares don't sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = [self.breakfast, self.lunch, self.dinner, self.snack];
        if shares.iter().any(|share| *share < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Meal calorie shares must be non-negative",
            ));
        }
        if (shares.iter().sum::<f64>() - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Meal calorie shares must sum to 1.0",
            ));
        }
        Ok(())
    }
}

/// Macronutrient distribution for a single meal (percentages of meal calories)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage
    pub protein_percent: f64,
    /// Carbohydrate percentage
    pub carbs_percent: f64,
    /// Fat percentage
    pub fat_percent: f64,
}

impl MacroDistribution {
    /// Create a distribution
    #[must_use]
    pub const fn new(protein_percent: f64, carbs_percent: f64, fat_percent: f64) -> Self {
        Self {
            protein_percent,
            carbs_percent,
            fat_percent,
        }
    }

    fn total(&self) -> f64 {
        self.protein_percent + self.carbs_percent + self.fat_percent
    }
}

/// Macro splits for each meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealMacroSplits {
    /// Breakfast split
    pub breakfast: MacroDistribution,
    /// Lunch split
    pub lunch: MacroDistribution,
    /// Dinner split
    pub dinner: MacroDistribution,
    /// Snack split
    pub snack: MacroDistribution,
}

impl Default for MealMacroSplits {
    fn default() -> Self {
        Self {
            breakfast: MacroDistribution::new(25.0, 45.0, 30.0),
            lunch: MacroDistribution::new(30.0, 40.0, 30.0),
            dinner: MacroDistribution::new(28.0, 42.0, 30.0),
            snack: MacroDistribution::new(40.0, 50.0, 10.0),
        }
    }
}

impl MealMacroSplits {
    /// Validate that each meal's macro percentages sum to 100%
    ///
    /// # Errors
    ///
    /// Returns an error if any meal's percentages don't sum to 100%
    pub fn validate(&self) -> Result<(), ConfigError> {
        let meals = [
            (self.breakfast, "Breakfast macros must sum to 100%"),
            (self.lunch, "Lunch macros must sum to 100%"),
            (self.dinner, "Dinner macros must sum to 100%"),
            (self.snack, "Snack macros must sum to 100%"),
        ];
        for (split, message) in meals {
            if (split.total() - 100.0).abs() > 0.1 {
                return Err(ConfigError::InvalidWeights(message));
            }
        }
        Ok(())
    }
}

/// Population defaults for missing profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionDefaults {
    /// Body weight when the profile has none (kg)
    pub weight_kg: f64,
    /// Daily water per kilogram of body weight (ml)
    pub hydration_ml_per_kg: f64,
}

impl Default for NutritionDefaults {
    fn default() -> Self {
        Self {
            weight_kg: DEFAULT_WEIGHT_KG,
            hydration_ml_per_kg: HYDRATION_ML_PER_KG,
        }
    }
}
