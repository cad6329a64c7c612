// ABOUTME: Daily calorie target and per-meal calorie and macro breakdown
// ABOUTME: Weight times a goal factor, split into fixed meal shares and macro percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use super::content::meal_suggestion;
use super::{MacroGrams, MealPlan, PlannedMeal};
use crate::config::intelligence::{MacroDistribution, NutritionConfig};
use cadence_core::constants::nutrition::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use cadence_core::models::{FitnessGoal, MealType};

/// Round a non-negative calorie amount to whole kcal
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_kcal(value: f64) -> u32 {
    // Safe: clamped into u32 range before the cast
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calories per kilogram for a goal
#[must_use]
pub fn calorie_factor(goal: FitnessGoal, config: &NutritionConfig) -> f64 {
    let factors = &config.calorie_factors;
    match goal {
        FitnessGoal::LoseWeight => factors.weight_loss,
        FitnessGoal::BuildMuscle | FitnessGoal::GainWeight => factors.muscle_gain,
        FitnessGoal::ImproveEndurance | FitnessGoal::MaintainHealth | FitnessGoal::Other => {
            factors.maintenance
        }
    }
}

/// Daily calorie target, `round(weight * factor)`
#[must_use]
pub fn target_calories(weight_kg: f64, goal: FitnessGoal, config: &NutritionConfig) -> u32 {
    round_kcal(weight_kg * calorie_factor(goal, config))
}

/// Grams of each macronutrient for a calorie amount and percentage split
#[must_use]
pub fn macro_grams(calories: f64, split: &MacroDistribution) -> MacroGrams {
    MacroGrams {
        protein_grams: one_decimal(calories * split.protein_percent / 100.0 / KCAL_PER_GRAM_PROTEIN),
        carbs_grams: one_decimal(calories * split.carbs_percent / 100.0 / KCAL_PER_GRAM_CARBS),
        fat_grams: one_decimal(calories * split.fat_percent / 100.0 / KCAL_PER_GRAM_FAT),
    }
}

fn slot(meal_type: MealType, config: &NutritionConfig) -> (f64, MacroDistribution) {
    let shares = &config.meal_shares;
    let macros = &config.meal_macros;
    match meal_type {
        MealType::Breakfast => (shares.breakfast, macros.breakfast),
        MealType::Lunch => (shares.lunch, macros.lunch),
        MealType::Dinner => (shares.dinner, macros.dinner),
        MealType::Snack => (shares.snack, macros.snack),
    }
}

/// Build the daily plan for a weight and goal
#[must_use]
pub fn build_meal_plan(weight_kg: f64, goal: FitnessGoal, config: &NutritionConfig) -> MealPlan {
    let target = target_calories(weight_kg, goal, config);

    let meals: Vec<PlannedMeal> = MealType::ALL
        .iter()
        .enumerate()
        .map(|(index, meal_type)| {
            let (share, split) = slot(*meal_type, config);
            let calories = round_kcal(f64::from(target) * share);
            PlannedMeal {
                meal_type: *meal_type,
                calories,
                macros: split,
                grams: macro_grams(f64::from(calories), &split),
                suggestion: meal_suggestion(goal, index).to_owned(),
            }
        })
        .collect();

    let total_grams = MacroGrams {
        protein_grams: one_decimal(meals.iter().map(|m| m.grams.protein_grams).sum()),
        carbs_grams: one_decimal(meals.iter().map(|m| m.grams.carbs_grams).sum()),
        fat_grams: one_decimal(meals.iter().map(|m| m.grams.fat_grams).sum()),
    };

    MealPlan {
        id: format!("meal-plan-{}", goal.as_str()),
        title: format!("Daily plan to {}", goal.description()),
        goal,
        target_calories: target,
        meals,
        total_grams,
    }
}
