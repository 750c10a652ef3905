//! Static seed data.
//!
//! All entities are created at process start from these constants and
//! live only in memory; nothing is persisted. The viewer starts with one
//! habit in Stasis so the recovery path is visible immediately.

use chrono::{DateTime, Duration, Utc};

use crate::current::FocusSession;
use crate::habit::{Habit, HabitStatus};
use crate::user::User;

fn habit(
    name: &str,
    identity_name: &str,
    streak_days: u32,
    last_logged: Option<DateTime<Utc>>,
    status: HabitStatus,
) -> Habit {
    let mut h = Habit::new(name, identity_name);
    h.streak_days = streak_days;
    h.last_logged = last_logged;
    h.status = status;
    h
}

/// The viewer's starting state: nothing logged today, Meditation in
/// recovery.
pub fn seed_user(now: DateTime<Utc>) -> User {
    let mut user = User::new("You", now);
    user.habits = vec![
        habit("Running", "Fighter", 6, None, HabitStatus::Active),
        habit("Meditation", "Monk", 21, None, HabitStatus::Stasis),
    ];
    user
}

/// The hardcoded friends list.
pub fn seed_friends(now: DateTime<Utc>) -> Vec<User> {
    let mut alex = User::new("Alex", now);
    alex.habits = vec![habit("Write", "Writer", 4, Some(now), HabitStatus::Active)];
    alex.focus_session = FocusSession::Active {
        started_at: now - Duration::minutes(25),
        intention: "Drafting Chapter 4".to_string(),
        verification: "Share the draft".to_string(),
    };
    alex.daily_win = Some("Finished the climax of the novel.".to_string());

    let mut jordan = User::new("Jordan", now);
    jordan.habits = vec![
        habit("Fast", "Stoic", 72, None, HabitStatus::Active),
        habit("Read", "Scholar", 12, Some(now), HabitStatus::Active),
    ];
    jordan.focus_session = FocusSession::Active {
        started_at: now - Duration::minutes(40),
        intention: "Reading Stoicism".to_string(),
        verification: "Margin notes".to_string(),
    };

    let mut casey = User::new("Casey", now);
    casey.habits = vec![habit("Build", "Founder", 14, Some(now), HabitStatus::Active)];
    casey.daily_win = Some("Closed our first enterprise lead.".to_string());

    vec![alex, jordan, casey]
}
