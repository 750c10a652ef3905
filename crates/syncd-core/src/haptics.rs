//! Haptic feedback patterns.
//!
//! Patterns are alternating on/off pulse durations in milliseconds, the
//! payload a vibration API consumes. The core only defines them; whether
//! anything buzzes is up to the host.

use serde::{Deserialize, Serialize};

use crate::events::Event;

/// A named vibration pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
    /// Aggressive heavy-impact pattern used when jolting a friend.
    Jolt,
    /// Short double pulse confirming a completed ritual.
    Success,
}

impl HapticPattern {
    /// Alternating on/off pulse durations in milliseconds.
    pub fn pulses(self) -> &'static [u64] {
        match self {
            HapticPattern::Jolt => &[100, 50, 100, 50, 200],
            HapticPattern::Success => &[50, 30, 50],
        }
    }

    /// Human-readable description of the pattern.
    pub fn description(self) -> &'static str {
        match self {
            HapticPattern::Jolt => "The Jolt",
            HapticPattern::Success => "Ritual complete",
        }
    }
}

/// Pattern to play for an event, if any.
pub fn for_event(event: &Event) -> Option<HapticPattern> {
    match event {
        Event::JoltSent { .. } => Some(HapticPattern::Jolt),
        Event::HabitLogged { .. } | Event::VictoryDeclared { .. } | Event::CurrentJoined { .. } => {
            Some(HapticPattern::Success)
        }
        Event::CurrentLeft { .. } => None,
    }
}
