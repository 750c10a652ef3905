//! Habit model and the daily logging transition.
//!
//! A habit carries a streak count, the instant it was last logged, and a
//! status. `Stasis` marks a broken streak sitting in a recovery grace
//! period: the streak count is preserved, and the next log clears the
//! status without incrementing ("re-ignite"). Plain `Active` logging
//! increments the streak by exactly one per calendar day.
//!
//! All calendar comparisons convert stored UTC instants into the offset
//! of the caller-supplied clock, so the day boundary is decided by the
//! caller's timezone rather than an ambient system call.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::stage::{identity_label, HabitStage};

/// Habit lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitStatus {
    /// Streak is live; logging increments it.
    Active,
    /// Streak was broken and is in a recovery grace period.
    Stasis,
}

/// Outcome of a successful logging transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogOutcome {
    /// Streak count after the transition.
    pub streak_days: u32,
    /// True when the log cleared Stasis instead of incrementing.
    pub reignited: bool,
}

/// A single tracked habit, owned exclusively by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier within the owner's collection
    pub id: Uuid,
    /// Display name, e.g. "Write"
    pub name: String,
    /// Identity asserted once the streak matures, e.g. "Writer"
    pub identity_name: String,
    /// Consecutive completed days
    pub streak_days: u32,
    /// Instant of the last completion; None = never completed
    pub last_logged: Option<DateTime<Utc>>,
    /// Current lifecycle status
    pub status: HabitStatus,
}

impl Habit {
    /// Create a fresh habit with no streak.
    pub fn new(name: impl Into<String>, identity_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            identity_name: identity_name.into(),
            streak_days: 0,
            last_logged: None,
            status: HabitStatus::Active,
        }
    }

    /// Progression band for the current streak.
    pub fn stage(&self) -> HabitStage {
        HabitStage::from_streak(self.streak_days)
    }

    /// Rendered headline for this habit ("ATTEMPTING WRITE", "I AM A WRITER").
    pub fn headline(&self) -> String {
        identity_label(self.streak_days, &self.name, &self.identity_name)
    }

    /// Whether this habit is in the Stasis recovery state.
    pub fn is_stasis(&self) -> bool {
        self.status == HabitStatus::Stasis
    }

    /// Whether the habit was completed on the same calendar day as `now`.
    ///
    /// Calendar-date equality, not elapsed duration: a habit logged just
    /// before midnight is not done-today one minute later.
    pub fn is_done_today(&self, now: DateTime<FixedOffset>) -> bool {
        match self.last_logged {
            Some(logged) => logged.with_timezone(now.offset()).date_naive() == now.date_naive(),
            None => false,
        }
    }

    /// Apply the daily logging transition.
    ///
    /// Active: streak increments by one. Stasis: streak is unchanged and
    /// the status returns to Active with no penalty replay. Both paths
    /// stamp `last_logged` with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AlreadyLoggedToday`] if the habit is
    /// already done for the current calendar day. The UI hides the action
    /// in that case; the guard here keeps a second invocation harmless.
    pub fn log(&mut self, now: DateTime<FixedOffset>) -> Result<LogOutcome, ValidationError> {
        if self.is_done_today(now) {
            return Err(ValidationError::AlreadyLoggedToday {
                habit: self.name.clone(),
            });
        }

        let reignited = self.status == HabitStatus::Stasis;
        if !reignited {
            self.streak_days += 1;
        }
        self.status = HabitStatus::Active;
        self.last_logged = Some(now.with_timezone(&Utc));

        Ok(LogOutcome {
            streak_days: self.streak_days,
            reignited,
        })
    }

    /// Sweep an Active habit into Stasis after a fully missed day.
    ///
    /// Triggers when the last completion lies two or more calendar days
    /// behind `now`. A habit that has never been logged stays Active;
    /// there is no streak to put at risk.
    pub fn refresh_status(&mut self, now: DateTime<FixedOffset>) {
        if self.status != HabitStatus::Active {
            return;
        }
        if let Some(logged) = self.last_logged {
            let logged_day = logged.with_timezone(now.offset()).date_naive();
            let gap = (now.date_naive() - logged_day).num_days();
            if gap >= 2 {
                self.status = HabitStatus::Stasis;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc_fixed(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .fixed_offset()
    }

    #[test]
    fn test_never_logged_is_not_done_today() {
        let habit = Habit::new("Running", "Fighter");
        assert!(!habit.is_done_today(utc_fixed(2026, 3, 10, 12, 0, 0)));
    }

    #[test]
    fn test_done_today_is_calendar_equality() {
        let mut habit = Habit::new("Running", "Fighter");
        habit.last_logged = Some(Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap());

        assert!(habit.is_done_today(utc_fixed(2026, 3, 10, 23, 59, 59)));
        assert!(!habit.is_done_today(utc_fixed(2026, 3, 11, 0, 0, 0)));
    }

    #[test]
    fn test_done_today_across_midnight_boundary() {
        // Logged just before midnight, checked just after: under a minute
        // elapsed, but the calendar day changed.
        let mut habit = Habit::new("Running", "Fighter");
        habit.last_logged = Some(
            Utc.with_ymd_and_hms(2026, 3, 10, 23, 59, 59).unwrap()
                + chrono::Duration::milliseconds(999),
        );
        let just_after = utc_fixed(2026, 3, 11, 0, 0, 0) + chrono::Duration::milliseconds(1);
        assert!(!habit.is_done_today(just_after));
    }

    #[test]
    fn test_done_today_respects_caller_offset() {
        // 23:30 UTC on the 10th is already the 11th at UTC+2.
        let mut habit = Habit::new("Running", "Fighter");
        habit.last_logged = Some(Utc.with_ymd_and_hms(2026, 3, 10, 23, 30, 0).unwrap());

        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2026, 3, 11, 1, 0, 0).unwrap();
        assert!(habit.is_done_today(now));

        let utc_now = utc_fixed(2026, 3, 11, 1, 0, 0);
        assert!(!habit.is_done_today(utc_now));
    }

    #[test]
    fn test_log_active_increments_streak() {
        let mut habit = Habit::new("Fast", "Stoic");
        habit.streak_days = 72;

        let outcome = habit.log(utc_fixed(2026, 3, 10, 8, 0, 0)).unwrap();
        assert_eq!(outcome.streak_days, 73);
        assert!(!outcome.reignited);
        assert_eq!(habit.status, HabitStatus::Active);
        assert!(habit.last_logged.is_some());
    }

    #[test]
    fn test_log_stasis_preserves_streak() {
        let mut habit = Habit::new("Fast", "Stoic");
        habit.streak_days = 72;
        habit.status = HabitStatus::Stasis;

        let outcome = habit.log(utc_fixed(2026, 3, 10, 8, 0, 0)).unwrap();
        assert_eq!(outcome.streak_days, 72);
        assert!(outcome.reignited);
        assert_eq!(habit.status, HabitStatus::Active);
    }

    #[test]
    fn test_log_twice_same_day_is_rejected() {
        let mut habit = Habit::new("Read", "Scholar");
        let now = utc_fixed(2026, 3, 10, 8, 0, 0);
        habit.log(now).unwrap();

        let err = habit.log(now + chrono::Duration::hours(2)).unwrap_err();
        assert!(matches!(err, ValidationError::AlreadyLoggedToday { .. }));
        assert_eq!(habit.streak_days, 1);
    }

    #[test]
    fn test_log_next_day_succeeds() {
        let mut habit = Habit::new("Read", "Scholar");
        habit.log(utc_fixed(2026, 3, 10, 23, 0, 0)).unwrap();
        let outcome = habit.log(utc_fixed(2026, 3, 11, 7, 0, 0)).unwrap();
        assert_eq!(outcome.streak_days, 2);
    }

    #[test]
    fn test_refresh_status_after_missed_day() {
        let mut habit = Habit::new("Meditation", "Monk");
        habit.streak_days = 21;
        habit.last_logged = Some(Utc.with_ymd_and_hms(2026, 3, 8, 20, 0, 0).unwrap());

        // Next day: still within grace, stays Active.
        habit.refresh_status(utc_fixed(2026, 3, 9, 12, 0, 0));
        assert_eq!(habit.status, HabitStatus::Active);

        // A full day was skipped: enters Stasis, streak preserved.
        habit.refresh_status(utc_fixed(2026, 3, 10, 12, 0, 0));
        assert_eq!(habit.status, HabitStatus::Stasis);
        assert_eq!(habit.streak_days, 21);
    }

    #[test]
    fn test_refresh_status_never_logged_stays_active() {
        let mut habit = Habit::new("Running", "Fighter");
        habit.streak_days = 6;
        habit.refresh_status(utc_fixed(2026, 3, 10, 12, 0, 0));
        assert_eq!(habit.status, HabitStatus::Active);
    }

    #[test]
    fn test_headline_follows_stage() {
        let mut habit = Habit::new("Write", "Writer");
        habit.streak_days = 4;
        assert_eq!(habit.headline(), "ATTEMPTING WRITE");
        habit.streak_days = 67;
        assert_eq!(habit.headline(), "I AM A WRITER");
    }
}
