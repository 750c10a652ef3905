//! User aggregate: habits, focus session, daily win.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::current::FocusSession;
use crate::habit::Habit;

/// A user and everything they own. Friends' values are the same shape
/// but read-only from the viewer's side; only the owning user's action
/// handlers mutate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Owned habits; ids are unique within the collection
    pub habits: Vec<Habit>,
    /// Participation in the Current
    pub focus_session: FocusSession,
    /// Last time this user acted
    pub last_active: DateTime<Utc>,
    /// Today's declared win, if any
    pub daily_win: Option<String>,
}

impl User {
    /// Create a user with no habits and an idle focus session.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            habits: Vec::new(),
            focus_session: FocusSession::Idle,
            last_active: now,
            daily_win: None,
        }
    }

    /// Look up a habit by id.
    pub fn habit(&self, id: Uuid) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Look up a habit by id, mutably.
    pub fn habit_mut(&mut self, id: Uuid) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Look up a habit by display name (case-insensitive).
    pub fn habit_by_name(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name.eq_ignore_ascii_case(name))
    }

    /// Whether any owned habit is done for the current calendar day.
    pub fn has_logged_any(&self, now: DateTime<FixedOffset>) -> bool {
        self.habits.iter().any(|h| h.is_done_today(now))
    }

    /// Whether any owned habit is still incomplete today. Friends with
    /// incomplete habits are the only valid jolt targets.
    pub fn has_incomplete(&self, now: DateTime<FixedOffset>) -> bool {
        self.habits.iter().any(|h| !h.is_done_today(now))
    }
}
