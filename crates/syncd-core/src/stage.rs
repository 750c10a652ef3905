//! Streak-to-stage classification and label rendering.
//!
//! A streak length maps to one of four progression bands. The bands are
//! fixed: days 0-7 are Attempting, 8-21 Practicing, 22-66 Consistent,
//! and 67 onward Identity. Once a habit reaches the Identity band the
//! rendered headline stops naming the habit and asserts the identity
//! instead ("I AM A WRITER").

use serde::{Deserialize, Serialize};

/// Number of streak days at which a habit crosses into the Identity band.
pub const IDENTITY_THRESHOLD: u32 = 67;

/// Progression band derived purely from streak length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitStage {
    /// Days 0-7: showing up.
    Attempting,
    /// Days 8-21: the habit is forming.
    Practicing,
    /// Days 22-66: the habit is established.
    Consistent,
    /// Day 67 onward: the habit has become who you are.
    Identity,
}

impl HabitStage {
    /// Classify a streak length. Every `u32` maps to exactly one stage.
    pub fn from_streak(days: u32) -> Self {
        if days < 8 {
            HabitStage::Attempting
        } else if days < 22 {
            HabitStage::Practicing
        } else if days < IDENTITY_THRESHOLD {
            HabitStage::Consistent
        } else {
            HabitStage::Identity
        }
    }

    /// Title-cased stage name for compact readouts.
    pub fn label(self) -> &'static str {
        match self {
            HabitStage::Attempting => "Attempting",
            HabitStage::Practicing => "Practicing",
            HabitStage::Consistent => "Consistent",
            HabitStage::Identity => "Identity",
        }
    }
}

/// Title-cased stage name for a streak length.
pub fn stage_label(days: u32) -> &'static str {
    HabitStage::from_streak(days).label()
}

/// Headline shown for a habit.
///
/// Before the Identity band: `"<STAGE> <HABITNAME>"` in upper case, e.g.
/// `"ATTEMPTING WRITE"`. At the Identity band the habit name disappears
/// entirely and the identity takes over: `"I AM A WRITER"`.
pub fn identity_label(days: u32, habit_name: &str, identity_name: &str) -> String {
    match HabitStage::from_streak(days) {
        HabitStage::Identity => format!("I AM A {}", identity_name.to_uppercase()),
        stage => format!(
            "{} {}",
            stage.label().to_uppercase(),
            habit_name.to_uppercase()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stage_bands() {
        assert_eq!(HabitStage::from_streak(0), HabitStage::Attempting);
        assert_eq!(HabitStage::from_streak(7), HabitStage::Attempting);
        assert_eq!(HabitStage::from_streak(8), HabitStage::Practicing);
        assert_eq!(HabitStage::from_streak(21), HabitStage::Practicing);
        assert_eq!(HabitStage::from_streak(22), HabitStage::Consistent);
        assert_eq!(HabitStage::from_streak(66), HabitStage::Consistent);
        assert_eq!(HabitStage::from_streak(67), HabitStage::Identity);
        assert_eq!(HabitStage::from_streak(u32::MAX), HabitStage::Identity);
    }

    #[test]
    fn test_stage_label_matches_stage_name() {
        assert_eq!(stage_label(5), "Attempting");
        assert_eq!(stage_label(12), "Practicing");
        assert_eq!(stage_label(30), "Consistent");
        assert_eq!(stage_label(100), "Identity");
    }

    #[test]
    fn test_identity_label_before_threshold_names_the_habit() {
        assert_eq!(identity_label(4, "Write", "Writer"), "ATTEMPTING WRITE");
        assert_eq!(
            identity_label(21, "Meditation", "Monk"),
            "PRACTICING MEDITATION"
        );
        assert_eq!(identity_label(30, "Build", "Founder"), "CONSISTENT BUILD");
    }

    #[test]
    fn test_identity_label_swap_at_threshold() {
        // Day 66 still names the habit; day 67 asserts the identity.
        assert_eq!(identity_label(66, "Fast", "Stoic"), "CONSISTENT FAST");
        assert_eq!(identity_label(67, "Fast", "Stoic"), "I AM A STOIC");
        assert_eq!(identity_label(72, "Fast", "Stoic"), "I AM A STOIC");
    }

    proptest! {
        /// Every streak length lands in exactly one band and the band
        /// never moves backwards as the streak grows.
        #[test]
        fn prop_stage_partition_is_monotonic(days in 0u32..10_000) {
            let stage = HabitStage::from_streak(days);
            let next = HabitStage::from_streak(days + 1);
            prop_assert!(stage <= next);
        }

        /// The habit name appears exactly while the streak is below the
        /// Identity threshold; the identity name only at or above it.
        #[test]
        fn prop_identity_label_mentions_one_name(days in 0u32..500) {
            let label = identity_label(days, "Fast", "Stoic");
            if days < IDENTITY_THRESHOLD {
                prop_assert!(label.contains("FAST"));
                prop_assert!(!label.contains("STOIC"));
            } else {
                prop_assert!(label.contains("STOIC"));
                prop_assert!(!label.contains("FAST"));
            }
        }
    }
}
