// ABOUTME: Criterion benchmarks for the goal analytics and recommendation generators
// ABOUTME: Runs each generator over deterministic synthetic snapshots of increasing size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

//! Criterion benchmarks for the recommendation engine.
//!
//! Snapshots are generated from a fixed seed so runs are comparable. Each
//! snapshot carries 90 days of logs per category with occasional missed days.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use cadence::intelligence::{
    analyze_goals, generate_goal_adjustments, generate_motivational_messages,
    generate_nutrition_recommendations, generate_report, generate_workout_recommendations,
};
use cadence::models::{DailyLog, FitnessGoal, Snapshot, TrackingCategory, UserProfile};
use cadence::snapshot::parse_snapshot;
use chrono::{Days, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Days of history generated per category
const HISTORY_DAYS: u64 = 90;

/// Category counts benchmarked for every generator
const CATEGORY_COUNTS: [usize; 3] = [3, 10, 30];

const CATEGORY_SHAPES: [(&str, &str, f64); 5] = [
    ("Steps", "steps", 10_000.0),
    ("Water", "glasses", 8.0),
    ("Workout", "minutes", 45.0),
    ("Sleep", "hours", 8.0),
    ("Pushups", "reps", 50.0),
];

fn bench_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .and_then(|date| date.and_hms_opt(19, 30, 0))
        .unwrap()
}

/// Deterministic snapshot with `categories` categories and up to 90 days of logs each
#[allow(clippy::cast_precision_loss)]
fn generate_snapshot(categories: usize) -> Snapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(categories as u64);
    let today = bench_now().date();

    let tracked: Vec<TrackingCategory> = (0..categories)
        .map(|index| {
            let (name, unit, target) = CATEGORY_SHAPES[index % CATEGORY_SHAPES.len()];
            TrackingCategory::new(format!("cat-{index}"), format!("{name} {index}"), unit, target)
        })
        .collect();

    let mut logs = Vec::new();
    for category in &tracked {
        for days_ago in 0..HISTORY_DAYS {
            // Roughly one day in five goes unlogged
            if rng.gen_bool(0.2) {
                continue;
            }
            let date = today.checked_sub_days(Days::new(days_ago)).unwrap();
            let value = (category.daily_target * rng.gen_range(0.3..1.6)).round();
            logs.push(DailyLog::new(
                format!("{}-{days_ago}", category.id),
                category.id.clone(),
                date,
                value,
            ));
        }
    }

    let profile = UserProfile::new("bench-user", "Bench")
        .with_weight(75.0)
        .with_goal(FitnessGoal::BuildMuscle)
        .with_goal_description("Intermediate lifter building strength");

    Snapshot::new(Some(profile), tracked, logs)
}

fn datasets() -> Vec<(usize, Snapshot)> {
    CATEGORY_COUNTS
        .iter()
        .map(|&count| (count, generate_snapshot(count)))
        .collect()
}

/// Benchmark per-category goal analysis
fn bench_goal_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_analysis");
    let now = bench_now();

    for (count, snapshot) in datasets() {
        group.throughput(Throughput::Elements(snapshot.logs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze_goals", count),
            &snapshot,
            |b, snapshot| b.iter(|| analyze_goals(black_box(snapshot), black_box(now))),
        );
    }

    group.finish();
}

/// Benchmark message, adjustment, and workout generation
fn bench_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendations");
    let now = bench_now();

    for (count, snapshot) in datasets() {
        group.bench_with_input(
            BenchmarkId::new("motivational_messages", count),
            &snapshot,
            |b, snapshot| {
                b.iter(|| generate_motivational_messages(black_box(snapshot), black_box(now)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("goal_adjustments", count),
            &snapshot,
            |b, snapshot| b.iter(|| generate_goal_adjustments(black_box(snapshot), black_box(now))),
        );
        group.bench_with_input(
            BenchmarkId::new("workout_recommendations", count),
            &snapshot,
            |b, snapshot| {
                b.iter(|| generate_workout_recommendations(black_box(snapshot), black_box(now)));
            },
        );
    }

    group.finish();
}

/// Benchmark nutrition recommendations, which depend only on the profile
fn bench_nutrition(c: &mut Criterion) {
    let mut group = c.benchmark_group("nutrition");
    let profile = UserProfile::new("bench-user", "Bench")
        .with_weight(75.0)
        .with_goal(FitnessGoal::LoseWeight);

    group.bench_function("with_profile", |b| {
        b.iter(|| generate_nutrition_recommendations(black_box(Some(&profile))));
    });
    group.bench_function("defaults", |b| {
        b.iter(|| generate_nutrition_recommendations(black_box(None)));
    });

    group.finish();
}

/// Benchmark the full pipeline from JSON text to report
fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    group.sample_size(50);
    let now = bench_now();

    for (count, snapshot) in datasets() {
        let json = serde_json::to_string(&snapshot).unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse_snapshot", count), &json, |b, json| {
            b.iter(|| parse_snapshot(black_box(json)).unwrap());
        });
        group.bench_with_input(
            BenchmarkId::new("generate_report", count),
            &snapshot,
            |b, snapshot| b.iter(|| generate_report(black_box(snapshot), black_box(now))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_goal_analysis,
    bench_recommendations,
    bench_nutrition,
    bench_full_report,
);
criterion_main!(benches);
