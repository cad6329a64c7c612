// ABOUTME: Static workout template catalog and the recommendation record types
// ABOUTME: Templates are built once and only ever cloned when scored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Workout difficulty, also used as the inferred user fitness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// New to structured exercise
    Beginner,
    /// Trains regularly
    Intermediate,
    /// High volume, experienced
    Advanced,
}

impl Difficulty {
    /// Position on the beginner-to-advanced scale
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Whether `other` is exactly one level away
    #[must_use]
    pub const fn is_adjacent(&self, other: Self) -> bool {
        self.rank().abs_diff(other.rank()) == 1
    }

    /// Lower-case label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// High-intensity interval training
    Hiit,
    /// Resistance training
    Strength,
    /// Sustained aerobic work
    Cardio,
    /// Stretching and mobility
    Flexibility,
}

/// Goal tags shared by templates and the inferred user goal set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTag {
    /// Reduce body fat
    WeightLoss,
    /// Add muscle mass
    MuscleGain,
    /// Get stronger
    Strength,
    /// Improve stamina
    Endurance,
    /// Improve range of motion
    Flexibility,
    /// No specific focus
    GeneralFitness,
}

impl GoalTag {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Flexibility => "flexibility",
            Self::GeneralFitness => "general fitness",
        }
    }
}

/// One movement inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Movement name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set, for rep-based movements
    pub reps: Option<u32>,
    /// Work interval per set in seconds, for timed movements
    pub duration_seconds: Option<u32>,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
    /// How to perform the movement
    pub instructions: String,
    /// Easier or harder variations
    pub modifications: Vec<String>,
}

impl Exercise {
    fn reps(name: &str, sets: u32, reps: u32, rest_seconds: u32, instructions: &str) -> Self {
        Self {
            name: name.to_owned(),
            sets,
            reps: Some(reps),
            duration_seconds: None,
            rest_seconds,
            instructions: instructions.to_owned(),
            modifications: Vec::new(),
        }
    }

    fn timed(name: &str, sets: u32, seconds: u32, rest_seconds: u32, instructions: &str) -> Self {
        Self {
            name: name.to_owned(),
            sets,
            reps: None,
            duration_seconds: Some(seconds),
            rest_seconds,
            instructions: instructions.to_owned(),
            modifications: Vec::new(),
        }
    }

    fn modified(mut self, modifications: &[&str]) -> Self {
        self.modifications = modifications.iter().map(|m| (*m).to_owned()).collect();
        self
    }
}

/// Catalog template enriched with a per-user score and explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    /// Stable template identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Template difficulty
    pub difficulty: Difficulty,
    /// Session length in minutes
    pub duration: u32,
    /// Approximate energy expenditure in kcal
    pub calories_estimate: u32,
    /// Required equipment, empty for bodyweight sessions
    pub equipment_needed: Vec<String>,
    /// Goals the template serves
    pub fitness_goals: Vec<GoalTag>,
    /// Main body regions worked
    pub body_parts: Vec<String>,
    /// Training modality
    pub workout_type: WorkoutType,
    /// Ordered movements
    pub exercises: Vec<Exercise>,
    /// Fit for this user in `[0, 1]`, zero in the catalog
    pub confidence_score: f64,
    /// Why the template was recommended, empty in the catalog
    pub reasoning: String,
}

struct TemplateSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    difficulty: Difficulty,
    duration: u32,
    calories_estimate: u32,
    equipment: &'static [&'static str],
    goals: &'static [GoalTag],
    body_parts: &'static [&'static str],
    workout_type: WorkoutType,
}

impl TemplateSpec {
    fn build(self, exercises: Vec<Exercise>) -> WorkoutRecommendation {
        WorkoutRecommendation {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            difficulty: self.difficulty,
            duration: self.duration,
            calories_estimate: self.calories_estimate,
            equipment_needed: owned(self.equipment),
            fitness_goals: self.goals.to_vec(),
            body_parts: owned(self.body_parts),
            workout_type: self.workout_type,
            exercises,
            confidence_score: 0.0,
            reasoning: String::new(),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Identifier of the beginner bodyweight template used as the fallback
pub const BEGINNER_BODYWEIGHT_ID: &str = "beginner-bodyweight-basics";

static CATALOG: OnceLock<Vec<WorkoutRecommendation>> = OnceLock::new();

/// The immutable template catalog
pub fn workout_catalog() -> &'static [WorkoutRecommendation] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a template by id
#[must_use]
pub fn find_template(id: &str) -> Option<&'static WorkoutRecommendation> {
    workout_catalog().iter().find(|template| template.id == id)
}

fn build_catalog() -> Vec<WorkoutRecommendation> {
    vec![
        TemplateSpec {
            id: BEGINNER_BODYWEIGHT_ID,
            title: "Bodyweight Basics",
            description: "A gentle full-body circuit that teaches the fundamental movement patterns.",
            difficulty: Difficulty::Beginner,
            duration: 20,
            calories_estimate: 120,
            equipment: &[],
            goals: &[GoalTag::GeneralFitness, GoalTag::Strength],
            body_parts: &["full body"],
            workout_type: WorkoutType::Strength,
        }
        .build(vec![
            Exercise::reps("Bodyweight Squat", 3, 10, 60, "Feet shoulder-width apart, sit back until thighs are parallel, drive up through the heels.")
                .modified(&["Squat to a chair", "Add a pause at the bottom"]),
            Exercise::reps("Incline Push-up", 3, 8, 60, "Hands on a bench or wall, body in a straight line, lower chest to the edge.")
                .modified(&["Use a higher surface", "Progress to floor push-ups"]),
            Exercise::reps("Glute Bridge", 3, 12, 45, "Lie on your back, feet flat, squeeze glutes to lift hips, lower slowly."),
            Exercise::timed("Forearm Plank", 3, 20, 45, "Elbows under shoulders, brace the core, keep hips level.")
                .modified(&["Drop to knees", "Extend to 40 seconds"]),
        ]),
        TemplateSpec {
            id: "hiit-fat-burner",
            title: "HIIT Fat Burner",
            description: "Short work intervals with brief rests to drive up heart rate and calorie burn.",
            difficulty: Difficulty::Intermediate,
            duration: 25,
            calories_estimate: 300,
            equipment: &[],
            goals: &[GoalTag::WeightLoss, GoalTag::Endurance],
            body_parts: &["full body", "legs", "core"],
            workout_type: WorkoutType::Hiit,
        }
        .build(vec![
            Exercise::timed("Jumping Jacks", 4, 40, 20, "Jump feet out while raising arms overhead, return, and keep a steady rhythm.")
                .modified(&["Step jacks without the jump"]),
            Exercise::timed("Squat Jumps", 4, 30, 30, "Squat down then explode upward, land softly and sink straight into the next rep.")
                .modified(&["Fast bodyweight squats", "Hold light dumbbells"]),
            Exercise::timed("Mountain Climbers", 4, 30, 30, "From a high plank, drive knees toward the chest alternately at pace."),
            Exercise::timed("Burpees", 3, 30, 30, "Squat, kick back to plank, return, and jump with arms overhead.")
                .modified(&["Step back instead of jumping", "Add a push-up"]),
        ]),
        TemplateSpec {
            id: "advanced-hiit-inferno",
            title: "HIIT Inferno",
            description: "Long, dense intervals for experienced athletes chasing conditioning and power.",
            difficulty: Difficulty::Advanced,
            duration: 35,
            calories_estimate: 450,
            equipment: &[],
            goals: &[GoalTag::WeightLoss, GoalTag::Endurance, GoalTag::Strength],
            body_parts: &["full body"],
            workout_type: WorkoutType::Hiit,
        }
        .build(vec![
            Exercise::timed("Tuck Jumps", 5, 40, 20, "Jump and pull both knees to the chest, land softly, repeat immediately."),
            Exercise::reps("Plyometric Push-up", 5, 10, 30, "Lower under control, push explosively so the hands leave the floor.")
                .modified(&["Standard push-ups"]),
            Exercise::timed("Sprint in Place", 5, 45, 15, "Drive knees high and pump arms at maximum effort."),
            Exercise::reps("Burpee Broad Jump", 4, 8, 30, "Burpee into a forward jump, turn around between reps."),
        ]),
        TemplateSpec {
            id: "dumbbell-strength-builder",
            title: "Dumbbell Strength Builder",
            description: "Classic compound lifts with dumbbells to build muscle and strength.",
            difficulty: Difficulty::Intermediate,
            duration: 45,
            calories_estimate: 280,
            equipment: &["dumbbells", "bench"],
            goals: &[GoalTag::MuscleGain, GoalTag::Strength],
            body_parts: &["chest", "back", "legs", "shoulders"],
            workout_type: WorkoutType::Strength,
        }
        .build(vec![
            Exercise::reps("Goblet Squat", 4, 10, 90, "Hold a dumbbell at the chest, squat deep keeping the torso upright."),
            Exercise::reps("Dumbbell Bench Press", 4, 10, 90, "Press the dumbbells up over the chest, lower to chest level with control.")
                .modified(&["Floor press without a bench"]),
            Exercise::reps("One-Arm Row", 4, 10, 60, "Brace on the bench, pull the dumbbell to the hip, lower slowly."),
            Exercise::reps("Romanian Deadlift", 3, 12, 90, "Hinge at the hips with soft knees, lower along the legs, stand tall."),
        ]),
        TemplateSpec {
            id: "advanced-power-lifting",
            title: "Heavy Power Session",
            description: "Low-rep, high-load barbell work for experienced lifters.",
            difficulty: Difficulty::Advanced,
            duration: 60,
            calories_estimate: 400,
            equipment: &["barbell", "squat rack", "plates"],
            goals: &[GoalTag::MuscleGain, GoalTag::Strength],
            body_parts: &["legs", "back", "chest"],
            workout_type: WorkoutType::Strength,
        }
        .build(vec![
            Exercise::reps("Back Squat", 5, 5, 180, "Bar on the upper back, brace hard, squat to depth and drive up."),
            Exercise::reps("Deadlift", 5, 3, 180, "Bar over mid-foot, flat back, push the floor away and lock out."),
            Exercise::reps("Overhead Press", 4, 6, 120, "Press from the shoulders to lockout, keep ribs down."),
        ]),
        TemplateSpec {
            id: "steady-state-cardio",
            title: "Steady-State Walk or Jog",
            description: "Conversational-pace cardio that builds an aerobic base.",
            difficulty: Difficulty::Beginner,
            duration: 30,
            calories_estimate: 220,
            equipment: &[],
            goals: &[GoalTag::WeightLoss, GoalTag::Endurance, GoalTag::GeneralFitness],
            body_parts: &["legs", "heart"],
            workout_type: WorkoutType::Cardio,
        }
        .build(vec![
            Exercise::timed("Warm-up Walk", 1, 300, 0, "Easy pace, loosen up the hips and ankles."),
            Exercise::timed("Brisk Walk or Easy Jog", 1, 1_200, 0, "Keep a pace where you can still hold a conversation.")
                .modified(&["Walk only", "Add short hill segments"]),
            Exercise::timed("Cool-down Walk", 1, 300, 0, "Slow down gradually and finish with light stretching."),
        ]),
        TemplateSpec {
            id: "interval-run",
            title: "Interval Run",
            description: "Alternating faster and recovery segments to raise your running fitness.",
            difficulty: Difficulty::Intermediate,
            duration: 40,
            calories_estimate: 380,
            equipment: &[],
            goals: &[GoalTag::Endurance, GoalTag::WeightLoss],
            body_parts: &["legs", "heart"],
            workout_type: WorkoutType::Cardio,
        }
        .build(vec![
            Exercise::timed("Easy Jog", 1, 600, 0, "Warm up at an easy, relaxed pace."),
            Exercise::timed("Fast Interval", 6, 120, 90, "Run at a hard but controlled pace, recover with a walk or slow jog.")
                .modified(&["Shorten to 60 seconds", "Run intervals uphill"]),
            Exercise::timed("Cool-down Jog", 1, 300, 0, "Ease down to a walk."),
        ]),
        TemplateSpec {
            id: "yoga-flow",
            title: "Gentle Yoga Flow",
            description: "A slow flow linking breath and movement to improve flexibility and calm.",
            difficulty: Difficulty::Beginner,
            duration: 30,
            calories_estimate: 120,
            equipment: &["yoga mat"],
            goals: &[GoalTag::Flexibility, GoalTag::GeneralFitness],
            body_parts: &["hips", "hamstrings", "spine", "shoulders"],
            workout_type: WorkoutType::Flexibility,
        }
        .build(vec![
            Exercise::timed("Cat-Cow", 2, 60, 0, "On hands and knees, alternate arching and rounding the spine with the breath."),
            Exercise::timed("Downward Dog", 3, 45, 15, "Lift the hips high, press the heels toward the floor.")
                .modified(&["Bend the knees", "Pedal the feet"]),
            Exercise::timed("Low Lunge", 2, 45, 15, "Step one foot forward, sink the hips, switch sides."),
            Exercise::timed("Child's Pose", 1, 90, 0, "Sit back on the heels with arms extended, breathe slowly."),
        ]),
        TemplateSpec {
            id: "mobility-recovery",
            title: "Mobility and Recovery",
            description: "Active recovery drills that keep joints moving between harder sessions.",
            difficulty: Difficulty::Intermediate,
            duration: 20,
            calories_estimate: 80,
            equipment: &[],
            goals: &[GoalTag::Flexibility],
            body_parts: &["hips", "shoulders", "spine"],
            workout_type: WorkoutType::Flexibility,
        }
        .build(vec![
            Exercise::reps("World's Greatest Stretch", 2, 6, 15, "Lunge, drop the elbow to the instep, rotate and reach to the ceiling."),
            Exercise::reps("90/90 Hip Switch", 2, 10, 15, "Seated with both knees bent at 90 degrees, rotate the knees side to side."),
            Exercise::reps("Thoracic Open Book", 2, 8, 15, "Lying on your side, open the top arm across the body and follow it with your eyes."),
        ]),
    ]
}
