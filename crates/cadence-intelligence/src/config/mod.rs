// ABOUTME: Configuration module for cadence-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

/// Intelligence module configuration (analysis, motivation, adjustments, workouts, nutrition)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
