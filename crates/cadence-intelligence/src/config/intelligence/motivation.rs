// ABOUTME: Motivational message generator configuration
// ABOUTME: Hour-of-day bands, progress and completion thresholds, streak milestones, result cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use cadence_core::constants::limits::MAX_MOTIVATIONAL_MESSAGES;
use serde::{Deserialize, Serialize};

/// Motivational message generator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotivationConfig {
    /// Hour-of-day bands gating reminders
    pub time_bands: TimeBands,
    /// Thresholds that trigger each generator
    pub thresholds: MotivationThresholds,
    /// Streak milestones celebrated and offered as challenges
    pub milestones: StreakMilestones,
    /// Output cap
    pub limits: MotivationLimits,
}

/// Half-open hour band `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBand {
    /// First hour inside the band
    pub start: u32,
    /// First hour after the band
    pub end: u32,
}

impl HourBand {
    /// Create a band
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `hour` falls inside the band
    #[must_use]
    pub const fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour < self.end
    }
}

/// Reminder bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBands {
    /// Morning kickoff band
    pub morning: HourBand,
    /// Midday check-in band
    pub midday: HourBand,
    /// Evening push band
    pub evening: HourBand,
}

impl Default for TimeBands {
    fn default() -> Self {
        Self {
            morning: HourBand::new(6, 10),
            midday: HourBand::new(12, 15),
            evening: HourBand::new(18, 21),
        }
    }
}

/// Progress and completion thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotivationThresholds {
    /// Midday reminder fires below this progress percentage
    pub midday_progress_ceiling: f64,
    /// Evening reminder fires between zero and this progress percentage
    pub evening_progress_ceiling: f64,
    /// Average completion below this, with a declining trend, is struggling
    pub struggling_completion: f64,
    /// Upper bound of the "getting there" completion band
    pub moderate_completion_ceiling: f64,
    /// Completion above this marks a broken streak as a comeback opportunity
    pub strong_history_completion: f64,
    /// Completion above this with an improving trend earns a level-up challenge
    pub overachiever_completion: f64,
    /// Tips are offered below this completion
    pub tip_completion_ceiling: f64,
}

impl Default for MotivationThresholds {
    fn default() -> Self {
        Self {
            midday_progress_ceiling: 50.0,
            evening_progress_ceiling: 80.0,
            struggling_completion: 0.5,
            moderate_completion_ceiling: 0.8,
            strong_history_completion: 0.7,
            overachiever_completion: 1.2,
            tip_completion_ceiling: 0.6,
        }
    }
}

/// Streak milestones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakMilestones {
    /// One-week celebration
    pub week: u32,
    /// Intermediate challenge milestone
    pub fortnight: u32,
    /// One-month celebration and final challenge milestone
    pub month: u32,
}

impl Default for StreakMilestones {
    fn default() -> Self {
        Self {
            week: 7,
            fortnight: 14,
            month: 30,
        }
    }
}

/// Output limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotivationLimits {
    /// Maximum messages returned after ranking
    pub max_messages: usize,
}

impl Default for MotivationLimits {
    fn default() -> Self {
        Self {
            max_messages: MAX_MOTIVATIONAL_MESSAGES,
        }
    }
}
