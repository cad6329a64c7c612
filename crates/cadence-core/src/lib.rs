// ABOUTME: Core types and constants for the Cadence goal analytics engine
// ABOUTME: Foundation crate with error handling, tracking data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

#![deny(unsafe_code)]

//! # Cadence Core
//!
//! Foundation crate providing shared types and constants for the Cadence goal
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Analysis windows, limits, and population defaults
//! - **models**: Tracking categories, daily logs, user profiles, and input snapshots

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`TrackingCategory`, `DailyLog`, `UserProfile`, `Snapshot`)
pub mod models;
