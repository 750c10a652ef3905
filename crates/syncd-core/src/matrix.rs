//! Sync Matrix visibility gate.
//!
//! Friends' activity stays masked until three conditions hold at once:
//! the configured sync hour has been reached, the viewer has logged at
//! least one habit today, and the viewer has declared a daily win. Any
//! single unmet condition keeps the gate fully closed. Callers need to
//! know *which* condition is blocking so they can show the matching
//! prompt, so the locked states are distinct variants rather than a
//! plain boolean.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;

/// Result of evaluating the visibility gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GateStatus {
    /// The sync hour has not been reached yet.
    AwaitingSyncHour { sync_hour: u32 },
    /// No habit has been logged today.
    AwaitingActivity,
    /// At least one habit is logged, but no daily win is declared.
    AwaitingReflection,
    /// All three gates passed; the tribe is visible.
    Unlocked,
}

impl GateStatus {
    /// Whether the matrix is open.
    pub fn is_unlocked(&self) -> bool {
        matches!(self, GateStatus::Unlocked)
    }

    /// Prompt shown while this gate is blocking.
    pub fn prompt(&self) -> String {
        match self {
            GateStatus::AwaitingSyncHour { sync_hour } => {
                format!("Wait for sync @ {sync_hour:02}:00")
            }
            GateStatus::AwaitingActivity => "Action required to reveal tribe".to_string(),
            GateStatus::AwaitingReflection => "Final ritual remains".to_string(),
            GateStatus::Unlocked => "Tribe revealed".to_string(),
        }
    }
}

/// Evaluate the three-gate unlock condition.
///
/// Gates are checked in prompt priority order: time first, then logged
/// activity, then the daily win. The win must be present and non-empty.
pub fn evaluate(
    now: DateTime<FixedOffset>,
    sync_hour: u32,
    habits: &[Habit],
    daily_win: Option<&str>,
) -> GateStatus {
    if now.hour() < sync_hour {
        return GateStatus::AwaitingSyncHour { sync_hour };
    }
    if !habits.iter().any(|h| h.is_done_today(now)) {
        return GateStatus::AwaitingActivity;
    }
    match daily_win {
        Some(win) if !win.is_empty() => GateStatus::Unlocked,
        _ => GateStatus::AwaitingReflection,
    }
}
