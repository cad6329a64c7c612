// ABOUTME: Tag-indexed library of habit tips offered to users below their completion target
// ABOUTME: Tips match a category when a tag is a substring of its lower-cased name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cadence Fitness Analytics

use rand::seq::SliceRandom;
use rand::Rng;

/// Tag shared by tips that apply to any category
pub const GENERAL_TAG: &str = "general";

/// A reusable tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    /// Lower-case tags matched against category names
    pub tags: &'static [&'static str],
    /// Short headline
    pub title: &'static str,
    /// Body text
    pub message: &'static str,
    /// Concrete next step
    pub suggested_action: &'static str,
}

impl Tip {
    /// Whether the tip applies to a category with this name
    #[must_use]
    pub fn matches(&self, category_name: &str) -> bool {
        let name = category_name.to_lowercase();
        self.tags
            .iter()
            .any(|tag| *tag == GENERAL_TAG || name.contains(tag))
    }
}

const TIPS: &[Tip] = &[
    Tip {
        tags: &["water", "hydration", "drink"],
        title: "Hydration Hack",
        message: "Keep a filled bottle within reach. You drink more when you don't have to get up for it.",
        suggested_action: "Fill a water bottle and keep it on your desk",
    },
    Tip {
        tags: &["water", "hydration"],
        title: "Pair It Up",
        message: "Attach a glass of water to something you already do, like every coffee or every meal.",
        suggested_action: "Drink a glass of water with your next meal",
    },
    Tip {
        tags: &["step", "walk", "run"],
        title: "Walk and Talk",
        message: "Take your next phone call on foot. A ten-minute call is roughly a thousand steps.",
        suggested_action: "Walk during your next call",
    },
    Tip {
        tags: &["step", "walk"],
        title: "Park Further Away",
        message: "Choose the far end of the car park or get off one stop early. The extra steps add up fast.",
        suggested_action: "Add a short detour to your next trip",
    },
    Tip {
        tags: &["sleep", "rest"],
        title: "Wind-Down Routine",
        message: "Dim screens and lights thirty minutes before bed to help your body get ready for sleep.",
        suggested_action: "Set a wind-down alarm for tonight",
    },
    Tip {
        tags: &["workout", "exercise", "training", "gym"],
        title: "Lay It Out",
        message: "Put your workout clothes out the night before. Removing friction makes starting easier.",
        suggested_action: "Prepare tomorrow's workout gear tonight",
    },
    Tip {
        tags: &["meditat", "mindful", "breath"],
        title: "Start Tiny",
        message: "Two minutes of focused breathing counts. Build the habit before stretching the session.",
        suggested_action: "Take two minutes for slow breathing now",
    },
    Tip {
        tags: &["read", "book", "study"],
        title: "One Page Rule",
        message: "Commit to a single page. Most days you'll keep going once you've started.",
        suggested_action: "Read one page right now",
    },
    Tip {
        tags: &["calorie", "food", "meal", "protein", "vegetable"],
        title: "Plan the Plate",
        message: "Decide tomorrow's meals tonight. Planned meals are easier to keep on track than improvised ones.",
        suggested_action: "Sketch tomorrow's meals",
    },
    Tip {
        tags: &[GENERAL_TAG],
        title: "Habit Stacking",
        message: "Link your goal to an existing routine, like right after brushing your teeth, so it happens automatically.",
        suggested_action: "Pick one daily routine to attach this goal to",
    },
    Tip {
        tags: &[GENERAL_TAG],
        title: "Set a Reminder",
        message: "A reminder at the time you're most likely to act turns intentions into actions.",
        suggested_action: "Schedule a reminder for tomorrow",
    },
];

/// Every tip in the library
#[must_use]
pub const fn all_tips() -> &'static [Tip] {
    TIPS
}

/// Tips applicable to a category, in library order
#[must_use]
pub fn matching_tips(category_name: &str) -> Vec<&'static Tip> {
    TIPS.iter().filter(|tip| tip.matches(category_name)).collect()
}

/// Pick one applicable tip using the supplied randomness source
pub fn choose_tip<R: Rng + ?Sized>(category_name: &str, rng: &mut R) -> Option<&'static Tip> {
    matching_tips(category_name).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_water_category_gets_water_and_general_tips() {
        let tips = matching_tips("Water Intake");
        assert!(tips.iter().any(|tip| tip.title == "Hydration Hack"));
        assert!(tips.iter().any(|tip| tip.tags.contains(&GENERAL_TAG)));
        assert!(!tips.iter().any(|tip| tip.title == "Walk and Talk"));
    }

    #[test]
    fn test_unknown_category_falls_back_to_general() {
        let tips = matching_tips("Guitar Practice");
        assert!(!tips.is_empty());
        assert!(tips.iter().all(|tip| tip.tags.contains(&GENERAL_TAG)));
    }

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let first = choose_tip("Daily Steps", &mut ChaCha8Rng::seed_from_u64(7));
        let second = choose_tip("Daily Steps", &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
