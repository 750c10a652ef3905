//! Single-writer application state container.
//!
//! Replaces ad-hoc global UI state with one mutable container: the
//! viewer, the read-only friends list, and the configuration. Every
//! mutation goes through a method here, takes the clock as an explicit
//! parameter, and returns the [`Event`] it produced. Friends are never
//! mutated; jolting a friend produces an event for the host to deliver.
//!
//! The container assumes exclusive access; a concurrent host must
//! serialize access per user record externally.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SyncConfig;
use crate::current::FocusSession;
use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::matrix::{self, GateStatus};
use crate::seed;
use crate::user::User;

/// The whole in-memory application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// The viewer; the only user this container mutates.
    pub user: User,
    /// Hardcoded friends, read-only.
    pub friends: Vec<User>,
    /// Gate and haptics configuration.
    pub config: SyncConfig,
}

impl AppState {
    /// Build a container around existing values.
    pub fn new(user: User, friends: Vec<User>, config: SyncConfig) -> Self {
        Self {
            user,
            friends,
            config,
        }
    }

    /// Build the container from seed data, as at process start.
    pub fn seeded(config: SyncConfig, now: DateTime<Utc>) -> Self {
        Self::new(seed::seed_user(now), seed::seed_friends(now), config)
    }

    /// Evaluate the Sync Matrix gate for the viewer.
    pub fn matrix_status(&self, now: DateTime<FixedOffset>) -> GateStatus {
        matrix::evaluate(
            now,
            self.config.gate.sync_hour,
            &self.user.habits,
            self.user.daily_win.as_deref(),
        )
    }

    /// Log one of the viewer's habits for today.
    pub fn log_habit(&mut self, habit_id: Uuid, now: DateTime<FixedOffset>) -> Result<Event> {
        let habit = self
            .user
            .habit_mut(habit_id)
            .ok_or(ValidationError::UnknownHabit(habit_id))?;
        let outcome = habit.log(now)?;
        let name = habit.name.clone();
        self.user.last_active = now.with_timezone(&Utc);

        Ok(Event::HabitLogged {
            habit_id,
            name,
            streak_days: outcome.streak_days,
            reignited: outcome.reignited,
            at: now.with_timezone(&Utc),
        })
    }

    /// Declare the daily win. The minimum-length gate lives here, on the
    /// caller side of the rule engine; the gate rule itself only checks
    /// presence.
    pub fn declare_win(&mut self, text: &str, now: DateTime<FixedOffset>) -> Result<Event> {
        let len = text.chars().count();
        let min = self.config.gate.min_win_length;
        if len < min {
            return Err(ValidationError::WinTooShort { len, min }.into());
        }
        self.user.daily_win = Some(text.to_string());
        self.user.last_active = now.with_timezone(&Utc);
        Ok(Event::VictoryDeclared {
            at: now.with_timezone(&Utc),
        })
    }

    /// Join the Current. Both the intention and the verification method
    /// are required.
    pub fn join_current(
        &mut self,
        intention: &str,
        verification: &str,
        now: DateTime<FixedOffset>,
    ) -> Result<Event> {
        if self.user.focus_session.is_active() {
            return Err(ValidationError::SessionAlreadyActive.into());
        }
        for (field, value) in [("intention", intention), ("verification", verification)] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                }
                .into());
            }
        }

        self.user.focus_session = FocusSession::Active {
            started_at: now.with_timezone(&Utc),
            intention: intention.to_string(),
            verification: verification.to_string(),
        };
        self.user.last_active = now.with_timezone(&Utc);
        Ok(Event::CurrentJoined {
            intention: intention.to_string(),
            at: now.with_timezone(&Utc),
        })
    }

    /// Leave the Current.
    pub fn leave_current(&mut self, now: DateTime<FixedOffset>) -> Result<Event> {
        if !self.user.focus_session.is_active() {
            return Err(ValidationError::NoActiveSession.into());
        }
        let duration_secs = self
            .user
            .focus_session
            .elapsed(now.with_timezone(&Utc))
            .num_seconds();
        self.user.focus_session = FocusSession::Idle;
        self.user.last_active = now.with_timezone(&Utc);
        Ok(Event::CurrentLeft {
            duration_secs,
            at: now.with_timezone(&Utc),
        })
    }

    /// Jolt a friend who still has incomplete habits. Only available
    /// while the matrix is unlocked, mirroring when the action is shown
    /// at all.
    pub fn jolt(&mut self, friend_id: Uuid, now: DateTime<FixedOffset>) -> Result<Event> {
        let status = self.matrix_status(now);
        if !status.is_unlocked() {
            return Err(ValidationError::MatrixLocked {
                prompt: status.prompt(),
            }
            .into());
        }
        let friend = self
            .friends
            .iter()
            .find(|f| f.id == friend_id)
            .ok_or(ValidationError::UnknownFriend(friend_id))?;
        if !friend.has_incomplete(now) {
            return Err(ValidationError::NothingToJolt {
                name: friend.name.clone(),
            }
            .into());
        }
        let event = Event::JoltSent {
            friend_id,
            friend_name: friend.name.clone(),
            at: now.with_timezone(&Utc),
        };
        self.user.last_active = now.with_timezone(&Utc);
        Ok(event)
    }

    /// Look up a friend by display name (case-insensitive).
    pub fn friend_by_name(&self, name: &str) -> Option<&User> {
        self.friends.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Friends currently in the Current.
    pub fn active_friends(&self) -> impl Iterator<Item = &User> {
        self.friends.iter().filter(|f| f.focus_session.is_active())
    }

    /// Sweep the viewer's habits for missed days (Active -> Stasis).
    pub fn refresh(&mut self, now: DateTime<FixedOffset>) {
        for habit in &mut self.user.habits {
            habit.refresh_status(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::HabitStatus;
    use chrono::TimeZone;

    fn now_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn at_hour(hour: u32) -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2026, 3, 10, hour, 30, 0)
            .unwrap()
            .fixed_offset()
    }

    fn seeded() -> AppState {
        AppState::seeded(SyncConfig::default(), now_utc())
    }

    #[test]
    fn test_log_habit_emits_event() {
        let mut state = seeded();
        let id = state.user.habit_by_name("Running").unwrap().id;

        let event = state.log_habit(id, at_hour(12)).unwrap();
        match event {
            Event::HabitLogged {
                streak_days,
                reignited,
                ref name,
                ..
            } => {
                assert_eq!(streak_days, 7);
                assert!(!reignited);
                assert_eq!(name, "Running");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(state.user.habit(id).unwrap().is_done_today(at_hour(12)));
    }

    #[test]
    fn test_log_stasis_habit_reignites() {
        let mut state = seeded();
        let id = state.user.habit_by_name("Meditation").unwrap().id;

        let event = state.log_habit(id, at_hour(12)).unwrap();
        match event {
            Event::HabitLogged {
                streak_days,
                reignited,
                ..
            } => {
                assert_eq!(streak_days, 21);
                assert!(reignited);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(
            state.user.habit(id).unwrap().status,
            HabitStatus::Active
        );
    }

    #[test]
    fn test_log_unknown_habit() {
        let mut state = seeded();
        let err = state.log_habit(Uuid::new_v4(), at_hour(12)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::UnknownHabit(_))
        ));
    }

    #[test]
    fn test_declare_win_length_gate() {
        let mut state = seeded();
        let err = state.declare_win("ok", at_hour(12)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::WinTooShort { len: 2, min: 3 })
        ));
        assert!(state.user.daily_win.is_none());

        state.declare_win("Ran 10k", at_hour(12)).unwrap();
        assert_eq!(state.user.daily_win.as_deref(), Some("Ran 10k"));
    }

    #[test]
    fn test_matrix_gates_flip_independently() {
        let mut state = seeded();

        // Before the sync hour, nothing else matters.
        assert_eq!(
            state.matrix_status(at_hour(20)),
            GateStatus::AwaitingSyncHour { sync_hour: 21 }
        );

        // Past the hour, no activity yet.
        assert_eq!(state.matrix_status(at_hour(21)), GateStatus::AwaitingActivity);

        // Activity logged, reflection missing.
        let id = state.user.habits[0].id;
        state.log_habit(id, at_hour(21)).unwrap();
        assert_eq!(
            state.matrix_status(at_hour(21)),
            GateStatus::AwaitingReflection
        );

        // All three gates pass.
        state.declare_win("Shipped the feature", at_hour(21)).unwrap();
        assert_eq!(state.matrix_status(at_hour(21)), GateStatus::Unlocked);
    }

    #[test]
    fn test_configured_sync_hour_is_honored() {
        let mut config = SyncConfig::default();
        config.gate.sync_hour = 18;
        let mut state = AppState::new(seed::seed_user(now_utc()), vec![], config);
        let id = state.user.habits[0].id;
        state.log_habit(id, at_hour(18)).unwrap();
        state.declare_win("Early sync", at_hour(18)).unwrap();
        assert!(state.matrix_status(at_hour(18)).is_unlocked());
        assert_eq!(
            state.matrix_status(at_hour(17)),
            GateStatus::AwaitingSyncHour { sync_hour: 18 }
        );
    }

    #[test]
    fn test_join_and_leave_current() {
        let mut state = seeded();

        let err = state.leave_current(at_hour(12)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::NoActiveSession)
        ));

        state
            .join_current("Deep work", "Commit pushed", at_hour(12))
            .unwrap();
        assert!(state.user.focus_session.is_active());

        let err = state
            .join_current("Again", "Again", at_hour(12))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::SessionAlreadyActive)
        ));

        let event = state
            .leave_current(at_hour(12) + chrono::Duration::seconds(90))
            .unwrap();
        match event {
            Event::CurrentLeft { duration_secs, .. } => assert_eq!(duration_secs, 90),
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(!state.user.focus_session.is_active());
    }

    #[test]
    fn test_join_current_requires_both_fields() {
        let mut state = seeded();
        let err = state.join_current("", "Commit pushed", at_hour(12)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::InvalidValue { .. })
        ));
        let err = state.join_current("Deep work", "  ", at_hour(12)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_jolt_requires_unlocked_matrix() {
        let mut state = seeded();
        let jordan = state.friend_by_name("Jordan").unwrap().id;

        let err = state.jolt(jordan, at_hour(20)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::MatrixLocked { .. })
        ));
    }

    #[test]
    fn test_jolt_only_hits_incomplete_friends() {
        let mut state = seeded();
        let id = state.user.habits[0].id;
        state.log_habit(id, at_hour(21)).unwrap();
        state.declare_win("Done for today", at_hour(21)).unwrap();

        // Jordan never logged "Fast" today.
        let jordan = state.friend_by_name("Jordan").unwrap().id;
        let event = state.jolt(jordan, at_hour(21)).unwrap();
        assert!(matches!(event, Event::JoltSent { .. }));

        // Casey's only habit is already done today.
        let casey = state.friend_by_name("Casey").unwrap().id;
        let err = state.jolt(casey, at_hour(21)).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CoreError::Validation(ValidationError::NothingToJolt { .. })
        ));
    }

    #[test]
    fn test_friends_are_never_mutated() {
        let mut state = seeded();
        let before = serde_json::to_value(&state.friends).unwrap();

        let id = state.user.habits[0].id;
        state.log_habit(id, at_hour(21)).unwrap();
        state.declare_win("Untouched tribe", at_hour(21)).unwrap();
        let jordan = state.friend_by_name("Jordan").unwrap().id;
        state.jolt(jordan, at_hour(21)).unwrap();

        let after = serde_json::to_value(&state.friends).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_refresh_sweeps_missed_days() {
        let mut state = seeded();
        let id = state.user.habits[0].id;
        state
            .log_habit(id, at_hour(12) - chrono::Duration::days(3))
            .unwrap();

        state.refresh(at_hour(12));
        assert_eq!(state.user.habit(id).unwrap().status, HabitStatus::Stasis);
    }
}
