// ABOUTME: Goal-conditioned nutrition tips and featured recipes
// ABOUTME: Static content selected by fitness goal; no personalization beyond the goal and weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use super::{NutritionTip, Recipe, TipTopic};
use cadence_core::models::FitnessGoal;

struct TipContent {
    id: &'static str,
    topic: TipTopic,
    title: &'static str,
    message: &'static str,
}

impl TipContent {
    fn to_tip(&self) -> NutritionTip {
        NutritionTip {
            id: self.id.to_owned(),
            topic: self.topic,
            title: self.title.to_owned(),
            message: self.message.to_owned(),
        }
    }
}

const LOSE_WEIGHT_TIPS: &[TipContent] = &[
    TipContent {
        id: "tip-protein-satiety",
        topic: TipTopic::Protein,
        title: "Lead with Protein",
        message: "Include a palm-sized portion of protein at every meal. It keeps you full longer and protects muscle while you're in a deficit.",
    },
    TipContent {
        id: "tip-volume-eating",
        topic: TipTopic::Fiber,
        title: "Fill Half the Plate with Vegetables",
        message: "High-fiber vegetables add volume for very few calories, making smaller portions feel satisfying.",
    },
];

const BUILD_MUSCLE_TIPS: &[TipContent] = &[
    TipContent {
        id: "tip-protein-spread",
        topic: TipTopic::Protein,
        title: "Spread Protein Through the Day",
        message: "Aim for 1.6 to 2.2 g of protein per kg of body weight, split across four meals of roughly equal size.",
    },
    TipContent {
        id: "tip-post-workout",
        topic: TipTopic::Timing,
        title: "Refuel After Training",
        message: "Have a meal with protein and carbohydrates within two hours of lifting to support recovery.",
    },
];

const GAIN_WEIGHT_TIPS: &[TipContent] = &[TipContent {
    id: "tip-calorie-dense",
    topic: TipTopic::Calories,
    title: "Choose Calorie-Dense Snacks",
    message: "Nuts, nut butters, dried fruit, and whole milk add calories without making you uncomfortably full.",
}];

const ENDURANCE_TIPS: &[TipContent] = &[
    TipContent {
        id: "tip-carb-timing",
        topic: TipTopic::Timing,
        title: "Fuel Before Long Sessions",
        message: "Eat a carbohydrate-rich meal two to three hours before longer efforts so your glycogen stores are topped up.",
    },
    TipContent {
        id: "tip-electrolytes",
        topic: TipTopic::Hydration,
        title: "Replace Electrolytes",
        message: "For sessions over an hour, add sodium to your fluids to replace what you lose in sweat.",
    },
];

const MAINTAIN_HEALTH_TIPS: &[TipContent] = &[TipContent {
    id: "tip-colorful-plate",
    topic: TipTopic::Variety,
    title: "Eat the Rainbow",
    message: "Different colored fruits and vegetables provide different micronutrients. Aim for three colors per meal.",
}];

/// Goal-specific tips in priority order
#[must_use]
pub fn goal_tips(goal: FitnessGoal) -> Vec<NutritionTip> {
    let content: &[TipContent] = match goal {
        FitnessGoal::LoseWeight => LOSE_WEIGHT_TIPS,
        FitnessGoal::BuildMuscle => BUILD_MUSCLE_TIPS,
        FitnessGoal::GainWeight => GAIN_WEIGHT_TIPS,
        FitnessGoal::ImproveEndurance => ENDURANCE_TIPS,
        FitnessGoal::MaintainHealth => MAINTAIN_HEALTH_TIPS,
        FitnessGoal::Other => &[],
    };
    content.iter().map(TipContent::to_tip).collect()
}

/// Daily water tip scaled to body weight
#[must_use]
pub fn hydration_tip(weight_kg: f64, ml_per_kg: f64) -> NutritionTip {
    let liters = (weight_kg * ml_per_kg / 100.0).round() / 10.0;
    NutritionTip {
        id: "tip-hydration".to_owned(),
        topic: TipTopic::Hydration,
        title: "Stay Hydrated".to_owned(),
        message: format!(
            "Aim for about {liters:.1} L of water a day, more on training days. Keep a bottle within reach."
        ),
    }
}

struct RecipeContent {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    prep_minutes: u32,
    calories_per_serving: u32,
    protein_grams: f64,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
}

const LEAN_BOWL: RecipeContent = RecipeContent {
    id: "recipe-chicken-veggie-bowl",
    name: "Lemon Chicken and Roasted Vegetable Bowl",
    description: "A high-protein, high-volume bowl that keeps calories in check.",
    prep_minutes: 30,
    calories_per_serving: 420,
    protein_grams: 42.0,
    ingredients: &["150 g chicken breast", "2 cups mixed vegetables", "1/2 cup quinoa", "1 lemon", "1 tsp olive oil"],
    steps: &["Roast the vegetables at 200°C for 20 minutes", "Pan-sear the chicken with lemon zest", "Serve over quinoa with a squeeze of lemon"],
};

const SALMON_RICE: RecipeContent = RecipeContent {
    id: "recipe-salmon-rice",
    name: "Salmon, Rice, and Greens",
    description: "Protein and slow carbohydrates for recovery and growth.",
    prep_minutes: 25,
    calories_per_serving: 650,
    protein_grams: 45.0,
    ingredients: &["180 g salmon fillet", "1 cup cooked brown rice", "2 cups spinach", "1 tbsp soy sauce", "1 tsp sesame oil"],
    steps: &["Bake the salmon at 200°C for 12 minutes", "Wilt the spinach in a hot pan", "Serve over rice and dress with soy and sesame"],
};

const PASTA_PRIMAVERA: RecipeContent = RecipeContent {
    id: "recipe-pasta-primavera",
    name: "Turkey Pasta Primavera",
    description: "Carbohydrate-forward fuel with lean protein for long training days.",
    prep_minutes: 25,
    calories_per_serving: 600,
    protein_grams: 35.0,
    ingredients: &["100 g wholewheat pasta", "120 g lean turkey mince", "1 courgette", "1 cup cherry tomatoes", "Fresh basil"],
    steps: &["Cook the pasta", "Brown the turkey and add the vegetables", "Toss everything with basil"],
};

const CHICKPEA_SALAD: RecipeContent = RecipeContent {
    id: "recipe-mediterranean-salad",
    name: "Mediterranean Chickpea Salad",
    description: "A balanced, fiber-rich lunch that comes together in minutes.",
    prep_minutes: 15,
    calories_per_serving: 450,
    protein_grams: 18.0,
    ingredients: &["1 can chickpeas", "1 cucumber", "1 cup cherry tomatoes", "50 g feta", "1 tbsp olive oil"],
    steps: &["Rinse the chickpeas", "Chop the vegetables", "Combine with feta and dress with olive oil"],
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

impl RecipeContent {
    fn to_recipe(&self, goal: FitnessGoal) -> Recipe {
        Recipe {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            goal,
            prep_minutes: self.prep_minutes,
            calories_per_serving: self.calories_per_serving,
            protein_grams: self.protein_grams,
            ingredients: owned(self.ingredients),
            instructions: owned(self.steps),
        }
    }
}

/// Featured recipe for a goal
#[must_use]
pub fn featured_recipe(goal: FitnessGoal) -> Recipe {
    let content = match goal {
        FitnessGoal::LoseWeight => &LEAN_BOWL,
        FitnessGoal::BuildMuscle | FitnessGoal::GainWeight => &SALMON_RICE,
        FitnessGoal::ImproveEndurance => &PASTA_PRIMAVERA,
        FitnessGoal::MaintainHealth | FitnessGoal::Other => &CHICKPEA_SALAD,
    };
    content.to_recipe(goal)
}

/// Short serving suggestion per meal slot and goal
#[must_use]
pub const fn meal_suggestion(goal: FitnessGoal, meal_index: usize) -> &'static str {
    const HIGH_PROTEIN: [&str; 4] = [
        "Greek yogurt with berries and oats",
        "Grilled chicken wrap with salad",
        "Lean beef stir-fry with rice",
        "Cottage cheese with fruit",
    ];
    const LIGHT: [&str; 4] = [
        "Veggie omelette with wholegrain toast",
        "Tuna salad with mixed greens",
        "Baked white fish with roasted vegetables",
        "Apple with a small handful of almonds",
    ];
    const ENDURANCE: [&str; 4] = [
        "Porridge with banana and honey",
        "Wholewheat pasta salad with chicken",
        "Salmon with sweet potato and greens",
        "Rice cakes with peanut butter",
    ];
    const BALANCED: [&str; 4] = [
        "Wholegrain toast with eggs and avocado",
        "Quinoa bowl with beans and vegetables",
        "Chicken, brown rice, and steamed broccoli",
        "Hummus with carrot sticks",
    ];

    let table = match goal {
        FitnessGoal::BuildMuscle | FitnessGoal::GainWeight => &HIGH_PROTEIN,
        FitnessGoal::LoseWeight => &LIGHT,
        FitnessGoal::ImproveEndurance => &ENDURANCE,
        FitnessGoal::MaintainHealth | FitnessGoal::Other => &BALANCED,
    };
    table[meal_index % table.len()]
}
