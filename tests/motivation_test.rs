// ABOUTME: Integration tests for motivational message generation and ranking
// ABOUTME: Covers onboarding, reminder bands, encouragement, milestones, challenges, ranking, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use cadence::intelligence::config::intelligence::{GoalAnalysisConfig, MotivationConfig};
use cadence::intelligence::{
    generate_motivational_messages, MessagePriority, MessageType, MotivationEngine,
};
use cadence::models::Snapshot;
use common::{at, category, log, logs_on, now, snapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn engine() -> MotivationEngine {
    MotivationEngine::with_config(MotivationConfig::default(), GoalAnalysisConfig::default())
}

#[test]
fn test_missing_profile_gets_onboarding() {
    let snapshot = Snapshot::new(None, vec![category("water", "Water", "glasses", 8.0)], vec![]);

    let messages = generate_motivational_messages(&snapshot, now());
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message_type, MessageType::Encouragement);
    assert_eq!(messages[0].priority, MessagePriority::High);
    assert_eq!(messages[0].title, "Welcome to Cadence");
    assert!(messages[0].actionable);
}

#[test]
fn test_no_categories_gets_onboarding() {
    let snapshot = snapshot(vec![], vec![]);

    let messages = engine().generate(&snapshot, now());
    assert_eq!(messages.len(), 1);
    assert!(messages[0].message.contains("Alex"));
}

#[test]
fn test_week_streak_with_empty_today() {
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        logs_on("water", 1..=7, 8.0),
    );

    let messages = engine().generate(&snapshot, now());

    assert_eq!(messages[0].title, "One Week Warrior");
    assert_eq!(messages[0].message_type, MessageType::Celebration);
    assert!(messages
        .iter()
        .any(|m| m.message_type == MessageType::Challenge && m.title == "14-Day Challenge"));
    assert!(messages.iter().any(|m| m.message_type == MessageType::Tip));
}

#[test]
fn test_morning_reminder_when_nothing_logged() {
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        logs_on("steps", 1..=3, 10_000.0),
    );

    let messages = engine().generate(&snapshot, at(7, 15));
    let reminder = messages
        .iter()
        .find(|m| m.message_type == MessageType::Reminder)
        .unwrap();

    assert_eq!(reminder.title, "Good Morning!");
    assert_eq!(reminder.priority, MessagePriority::Medium);
    assert_eq!(reminder.category.as_deref(), Some("Steps"));
}

#[test]
fn test_evening_push_is_high_priority() {
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        vec![log("steps", 0, 4_000.0)],
    );

    let messages = engine().generate(&snapshot, at(18, 0));
    let reminder = messages
        .iter()
        .find(|m| m.message_type == MessageType::Reminder)
        .unwrap();

    assert_eq!(reminder.title, "Final Push!");
    assert_eq!(reminder.priority, MessagePriority::High);
}

#[test]
fn test_midday_check_in_below_half() {
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        vec![log("steps", 0, 2_000.0)],
    );

    let messages = engine().generate(&snapshot, at(13, 0));
    let reminder = messages
        .iter()
        .find(|m| m.message_type == MessageType::Reminder)
        .unwrap();

    assert_eq!(reminder.title, "Midday Check-in");
    assert_eq!(reminder.priority, MessagePriority::Medium);
    assert!(reminder.actionable);
}

#[test]
fn test_band_end_hours_are_exclusive() {
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        vec![log("steps", 0, 4_000.0)],
    );

    for hour in [10, 15, 21] {
        let messages = engine().generate(&snapshot, at(hour, 0));
        assert!(
            messages.iter().all(|m| m.message_type != MessageType::Reminder),
            "unexpected reminder at {hour}:00"
        );
    }
}

#[test]
fn test_struggling_user_gets_encouragement() {
    // Strong older week, almost nothing recently
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        [logs_on("water", 7..14, 8.0), vec![log("water", 2, 1.0)]].concat(),
    );

    let messages = engine().generate(&snapshot, at(11, 0));
    let struggling = messages
        .iter()
        .find(|m| m.title == "Every Step Counts")
        .unwrap();

    assert_eq!(struggling.message_type, MessageType::Encouragement);
    assert_eq!(struggling.priority, MessagePriority::High);
}

#[test]
fn test_moderate_average_gets_low_priority_encouragement() {
    // 20 of the last 30 days met: average completion 0.67
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 10.0)],
        logs_on("water", 0..20, 10.0),
    );

    let messages = engine().generate(&snapshot, at(11, 0));
    let encouragement = messages
        .iter()
        .find(|m| m.title == "You're Getting There")
        .unwrap();

    assert_eq!(encouragement.message_type, MessageType::Encouragement);
    assert_eq!(encouragement.priority, MessagePriority::Low);
    assert!(!encouragement.actionable);
}

#[test]
fn test_broken_streak_after_strong_history_is_comeback() {
    // Met every day from 2 to 29 days ago, missed yesterday and today
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        logs_on("steps", 2..30, 10_000.0),
    );

    let messages = engine().generate(&snapshot, at(11, 0));
    assert!(messages.iter().any(|m| m.title == "Time for a Comeback"));
}

#[test]
fn test_quiet_hour_without_triggers_keeps_going() {
    // Five huge days lift the monthly average to 0.85; today is half done, streak 6
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        [logs_on("steps", 1..=5, 50_000.0), vec![log("steps", 0, 5_000.0)]].concat(),
    );

    let messages = engine().generate(&snapshot, at(23, 0));
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].title, "Keep Going");
    assert_eq!(messages[0].priority, MessagePriority::Medium);
    assert!(messages[0].category.is_none());
}

#[test]
fn test_goal_met_late_evening_celebrates() {
    let snapshot = snapshot(
        vec![category("steps", "Steps", "steps", 10_000.0)],
        logs_on("steps", 0..3, 10_000.0),
    );

    let messages = engine().generate(&snapshot, at(23, 0));
    assert_eq!(messages[0].title, "Goal Crushed!");
    assert!(messages.iter().all(|m| m.title != "Keep Going"));
}

#[test]
fn test_overperformer_on_the_rise_gets_level_up() {
    // Tripled output this week on top of a month of meeting the target
    let snapshot = snapshot(
        vec![category("pushups", "Pushups", "reps", 10.0)],
        [logs_on("pushups", 0..7, 30.0), logs_on("pushups", 7..30, 10.0)].concat(),
    );

    let messages = engine().generate(&snapshot, at(11, 0));
    let challenge = messages
        .iter()
        .find(|m| m.title == "Level Up Challenge")
        .unwrap();

    assert_eq!(challenge.message_type, MessageType::Challenge);
    assert_eq!(challenge.priority, MessagePriority::Medium);
    assert!(messages.iter().all(|m| m.title != "30-Day Challenge"));
}

#[test]
fn test_thirty_day_streak_is_monthly_master() {
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        logs_on("water", 0..30, 8.0),
    );

    let messages = engine().generate(&snapshot, at(11, 0));
    let celebration = messages
        .iter()
        .find(|m| m.title == "Monthly Master")
        .unwrap();

    assert_eq!(celebration.message_type, MessageType::Celebration);
    assert_eq!(celebration.priority, MessagePriority::High);
    assert!(messages.iter().all(|m| m.title != "One Week Warrior"));
    assert!(messages.iter().all(|m| m.message_type != MessageType::Challenge));
}

#[test]
fn test_messages_are_bounded_and_ranked() {
    let categories = vec![
        category("water", "Water", "glasses", 8.0),
        category("steps", "Steps", "steps", 10_000.0),
        category("sleep", "Sleep", "hours", 8.0),
        category("reading", "Reading", "pages", 20.0),
    ];
    let logs = [
        vec![log("water", 0, 2.0)],
        vec![log("steps", 0, 1_000.0)],
        vec![log("sleep", 0, 3.0)],
        vec![log("reading", 0, 4.0)],
    ]
    .concat();
    let snapshot = snapshot(categories, logs);

    let messages = engine().generate(&snapshot, at(19, 0));

    assert!(!messages.is_empty());
    assert!(messages.len() <= 5);
    let weights: Vec<u8> = messages.iter().map(|m| m.priority.weight()).collect();
    assert!(weights.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_generation_is_idempotent() {
    let snapshot = snapshot(
        vec![
            category("water", "Water", "glasses", 8.0),
            category("steps", "Steps", "steps", 10_000.0),
        ],
        [logs_on("water", 1..=7, 8.0), vec![log("steps", 0, 3_000.0)]].concat(),
    );

    let first = engine().generate(&snapshot, now());
    let second = engine().generate(&snapshot, now());
    assert_eq!(first, second);

    let ids: HashSet<_> = first.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), first.len());
    assert!(first.iter().all(|m| m.timestamp == now()));
}

#[test]
fn test_injected_rng_is_reproducible() {
    let snapshot = snapshot(
        vec![category("water", "Water", "glasses", 8.0)],
        vec![log("water", 0, 1.0)],
    );

    let mut first_rng = ChaCha8Rng::seed_from_u64(7);
    let mut second_rng = ChaCha8Rng::seed_from_u64(7);
    let first = engine().generate_with_rng(&snapshot, now(), &mut first_rng);
    let second = engine().generate_with_rng(&snapshot, now(), &mut second_rng);

    assert_eq!(first, second);
}

#[test]
fn test_message_serializes_type_field() {
    let snapshot = Snapshot::new(None, vec![], vec![]);
    let messages = generate_motivational_messages(&snapshot, now());

    let json = serde_json::to_value(&messages[0]).unwrap();
    assert_eq!(json["type"], "encouragement");
    assert_eq!(json["priority"], "high");
    assert!(json.get("category").is_none());
}
