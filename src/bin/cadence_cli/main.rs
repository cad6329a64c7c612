// ABOUTME: Cadence CLI - runs the analytics and recommendation engines over a snapshot file
// ABOUTME: Prints goal analyses, messages, adjustments, workouts, nutrition, or a full report as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics
//!
//! Usage:
//! ```bash
//! # Per-category progress for a snapshot exported from the record store
//! cadence-cli analyze --snapshot snapshot.json
//!
//! # Motivational messages at a fixed instant with a fixed random seed
//! cadence-cli messages --snapshot snapshot.json --now 2025-03-10T07:30:00 --seed 42
//!
//! # Everything at once, indented
//! cadence-cli report --snapshot snapshot.json --pretty
//! ```

mod commands;

use anyhow::{Context, Result};
use cadence::logging::{init_logging, LoggingConfig};
use cadence::snapshot::load_snapshot;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "cadence-cli",
    about = "Cadence goal analytics CLI",
    long_about = "Runs the Cadence analytics and recommendation engines over a JSON snapshot and prints the results as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot document with profile, categories, and logs
    #[arg(long, short = 's', global = true, default_value = "snapshot.json")]
    snapshot: PathBuf,

    /// Local wall-clock instant to evaluate at (defaults to the current local time)
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<NaiveDateTime>,

    /// Seed for the tip selection (defaults to a seed derived from --now)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Per-category goal analyses and an overview
    Analyze,

    /// Ranked motivational messages
    Messages,

    /// Goal target adjustment suggestions
    Adjustments,

    /// Scored workout recommendations
    Workouts,

    /// Meal plan, tips, and featured recipe
    Nutrition,

    /// Fitness profile inferred for workout scoring
    Profile,

    /// Output of every generator
    Report,
}

/// Accept `2025-03-10T07:30:00`, `2025-03-10 07:30`, or a bare date (start of day)
fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("'{value}' is not a local date-time such as 2025-03-10T07:30:00"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingConfig::from_env().verbose().init()?;
    } else {
        init_logging()?;
    }

    let snapshot = load_snapshot(&cli.snapshot)
        .with_context(|| format!("Loading snapshot {}", cli.snapshot.display()))?;
    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());
    info!(%now, seed = ?cli.seed, "Running engines");

    let output = commands::run(cli.command, &snapshot, now, cli.seed)?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
