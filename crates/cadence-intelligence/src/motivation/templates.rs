// ABOUTME: Parameterized message text for each motivational rule
// ABOUTME: Selection logic lives in the engine; this module only renders prose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use crate::goal_progress::GoalAnalysis;

/// Rendered title, body, and optional call to action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Short headline
    pub title: String,
    /// Body text with name and category interpolated
    pub message: String,
    /// Concrete next step, present for actionable messages
    pub suggested_action: Option<String>,
}

impl MessageTemplate {
    fn new(title: impl Into<String>, message: String) -> Self {
        Self {
            title: title.into(),
            message,
            suggested_action: None,
        }
    }

    fn with_action(mut self, action: String) -> Self {
        self.suggested_action = Some(action);
        self
    }
}

fn amount(value: f64) -> String {
    if (value - value.round()).abs() < 0.05 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn label(analysis: &GoalAnalysis) -> String {
    analysis.category_name.to_lowercase()
}

pub fn morning_kickoff(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Good Morning!",
        format!(
            "Good morning, {name}! A fresh day for your {} goal of {} {}.",
            label(analysis),
            amount(analysis.target),
            analysis.unit
        ),
    )
    .with_action(format!("Log your first {} of the day", analysis.unit))
}

pub fn midday_check_in(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Midday Check-in",
        format!(
            "Hey {name}, you're at {:.0}% of your {} goal. Plenty of day left to close the gap.",
            analysis.progress_percentage,
            label(analysis)
        ),
    )
    .with_action(format!(
        "Add {} {} before the afternoon",
        amount(analysis.remaining() / 2.0),
        analysis.unit
    ))
}

pub fn evening_push(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Final Push!",
        format!(
            "{name}, only {} {} left to hit your {} goal today. You can do this!",
            amount(analysis.remaining()),
            analysis.unit,
            label(analysis)
        ),
    )
    .with_action(format!(
        "Finish the last {} {}",
        amount(analysis.remaining()),
        analysis.unit
    ))
}

pub fn struggling(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Every Step Counts",
        format!(
            "{name}, {} has been tough lately. Small wins add up, so aim for just a little today.",
            label(analysis)
        ),
    )
    .with_action(format!(
        "Log any amount of {} today",
        label(analysis)
    ))
}

pub fn getting_there(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "You're Getting There",
        format!(
            "Nice consistency, {name}! You're averaging {:.0}% of your {} goal.",
            analysis.average_completion * 100.0,
            label(analysis)
        ),
    )
}

pub fn comeback(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Time for a Comeback",
        format!(
            "{name}, your {} streak paused, but your track record is strong. Start a new one today.",
            label(analysis)
        ),
    )
    .with_action(format!("Log {} to restart your streak", label(analysis)))
}

pub fn goal_crushed(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Goal Crushed!",
        format!(
            "Amazing, {name}! You hit {} {} of {} today.",
            amount(analysis.current_progress),
            analysis.unit,
            label(analysis)
        ),
    )
}

pub fn one_week_warrior(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "One Week Warrior",
        format!(
            "Seven days in a row of {}, {name}! A full week of showing up.",
            label(analysis)
        ),
    )
}

pub fn monthly_master(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Monthly Master",
        format!(
            "Thirty straight days of {}, {name}. That's a habit now.",
            label(analysis)
        ),
    )
}

pub fn level_up(name: &str, analysis: &GoalAnalysis) -> MessageTemplate {
    MessageTemplate::new(
        "Level Up Challenge",
        format!(
            "{name}, you're averaging {:.0}% of your {} goal and still climbing. Ready for a bigger target?",
            analysis.average_completion * 100.0,
            label(analysis)
        ),
    )
    .with_action(format!(
        "Raise your daily {} target",
        label(analysis)
    ))
}

pub fn streak_challenge(name: &str, analysis: &GoalAnalysis, next_milestone: u32) -> MessageTemplate {
    MessageTemplate::new(
        format!("{next_milestone}-Day Challenge"),
        format!(
            "{name}, you're on a {}-day {} streak. Can you make it to {next_milestone}?",
            analysis.streak,
            label(analysis)
        ),
    )
    .with_action(format!(
        "Keep logging {} for {} more days",
        label(analysis),
        next_milestone.saturating_sub(analysis.streak)
    ))
}

pub fn keep_going(name: &str) -> MessageTemplate {
    MessageTemplate::new(
        "Keep Going",
        format!("You're doing great, {name}. Consistency beats intensity, one day at a time."),
    )
}

pub fn onboarding(name: &str) -> MessageTemplate {
    MessageTemplate::new(
        "Welcome to Cadence",
        format!("Hi {name}! Set up a goal to track and we'll start cheering you on."),
    )
    .with_action("Create your first tracking category".to_owned())
}
