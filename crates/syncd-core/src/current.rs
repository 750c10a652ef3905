//! "The Current" -- the shared deep-focus stream.
//!
//! A focus session is either idle or active; the start instant,
//! intention, and verification method exist only while active, which the
//! enum encodes directly.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// A user's focus session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FocusSession {
    /// Not in the Current.
    Idle,
    /// In the Current since `started_at`.
    Active {
        started_at: DateTime<Utc>,
        /// What the session is for, e.g. "Drafting Chapter 4"
        intention: String,
        /// How completion will be verified
        verification: String,
    },
}

impl Default for FocusSession {
    fn default() -> Self {
        FocusSession::Idle
    }
}

impl FocusSession {
    pub fn is_active(&self) -> bool {
        matches!(self, FocusSession::Active { .. })
    }

    /// Session intention, if active.
    pub fn intention(&self) -> Option<&str> {
        match self {
            FocusSession::Active { intention, .. } => Some(intention),
            FocusSession::Idle => None,
        }
    }

    /// Time spent in the session so far; zero while idle.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        match self {
            FocusSession::Active { started_at, .. } => {
                (now - *started_at).max(Duration::zero())
            }
            FocusSession::Idle => Duration::zero(),
        }
    }
}

/// Number of participants currently in the Current, viewer included.
pub fn synced_count(user: &User, friends: &[User]) -> usize {
    let own = usize::from(user.focus_session.is_active());
    own + friends.iter().filter(|f| f.focus_session.is_active()).count()
}

/// MM:SS readout for the session timer.
pub fn format_elapsed(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
