// ABOUTME: Dispatches cadence-cli subcommands to the engines
// ABOUTME: Each command turns a snapshot and instant into a JSON value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use super::Command;
use anyhow::Result;
use cadence::models::Snapshot;
use cadence::intelligence::{
    analyze_goals, generate_goal_adjustments, generate_nutrition_recommendations,
    generate_report, generate_workout_recommendations, infer_fitness_profile, seeded_rng,
    summarize_goals, MotivationEngine, MotivationalMessage,
};
use chrono::NaiveDateTime;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{json, Value};

/// Run one subcommand and collect its output
pub fn run(
    command: Command,
    snapshot: &Snapshot,
    now: NaiveDateTime,
    seed: Option<u64>,
) -> Result<Value> {
    let value = match command {
        Command::Analyze => {
            let goals = analyze_goals(snapshot, now);
            json!({
                "overview": summarize_goals(&goals),
                "goals": goals,
            })
        }
        Command::Messages => serde_json::to_value(messages(snapshot, now, seed))?,
        Command::Adjustments => serde_json::to_value(generate_goal_adjustments(snapshot, now))?,
        Command::Workouts => {
            serde_json::to_value(generate_workout_recommendations(snapshot, now))?
        }
        Command::Nutrition => serde_json::to_value(generate_nutrition_recommendations(
            snapshot.profile.as_ref(),
        ))?,
        Command::Profile => serde_json::to_value(infer_fitness_profile(snapshot, now)?)?,
        Command::Report => {
            let mut report = generate_report(snapshot, now);
            if seed.is_some() {
                report.messages = messages(snapshot, now, seed);
            }
            serde_json::to_value(report)?
        }
    };
    Ok(value)
}

fn messages(snapshot: &Snapshot, now: NaiveDateTime, seed: Option<u64>) -> Vec<MotivationalMessage> {
    let mut rng = seed.map_or_else(|| seeded_rng(now), ChaCha8Rng::seed_from_u64);
    MotivationEngine::new().generate_with_rng(snapshot, now, &mut rng)
}
