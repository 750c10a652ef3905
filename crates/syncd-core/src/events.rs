use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every state change produces an Event. The presentation layer renders
/// them and maps them to haptic feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A habit was logged for today.
    HabitLogged {
        habit_id: Uuid,
        name: String,
        streak_days: u32,
        /// True when the log cleared Stasis instead of incrementing.
        reignited: bool,
        at: DateTime<Utc>,
    },
    /// The daily win was declared.
    VictoryDeclared {
        at: DateTime<Utc>,
    },
    /// The user joined the Current.
    CurrentJoined {
        intention: String,
        at: DateTime<Utc>,
    },
    /// The user left the Current.
    CurrentLeft {
        duration_secs: i64,
        at: DateTime<Utc>,
    },
    /// A jolt was sent to a friend with incomplete habits.
    JoltSent {
        friend_id: Uuid,
        friend_name: String,
        at: DateTime<Utc>,
    },
}
