// ABOUTME: Main library entry point for the Cadence goal analytics engine
// ABOUTME: Re-exports the engine crates and adds logging setup and snapshot loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy across the workspace
#![deny(unsafe_code)]

//! # Cadence
//!
//! Goal analytics and recommendation engine for a personal habit and fitness
//! tracker. Given a snapshot of tracking categories, daily logs, and an
//! optional profile, it derives progress analyses, motivational messages,
//! target adjustments, workout recommendations, and nutrition guidance.
//!
//! ## Architecture
//!
//! - **`cadence_core`**: errors, constants, and input models
//! - **`cadence_intelligence`**: the pure analytics and recommendation engines
//! - **logging**: tracing subscriber setup for the command-line front end
//! - **snapshot**: reading a snapshot document from JSON
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cadence::snapshot::load_snapshot;
//! use cadence::intelligence::generate_report;
//! use cadence::errors::AppResult;
//! use chrono::Local;
//!
//! fn main() -> AppResult<()> {
//!     let snapshot = load_snapshot("snapshot.json")?;
//!     let report = generate_report(&snapshot, Local::now().naive_local());
//!     println!("{} goals analyzed", report.goals.len());
//!     Ok(())
//! }
//! ```

/// Shared errors, constants, and models
pub use cadence_core::{constants, errors, models};

/// Analytics and recommendation engines
pub use cadence_intelligence as intelligence;

/// Logging configuration and structured logging setup
pub mod logging;

/// Snapshot document loading and validation
pub mod snapshot;
