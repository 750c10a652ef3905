//! # SYNCD Core Library
//!
//! Core business logic for SYNCD, a social habit tracker. The library is
//! a small rule engine plus a single-writer state container; rendering,
//! input collection, and vibration hardware belong to the host.
//!
//! ## Architecture
//!
//! - **Habit rules**: pure functions mapping streak lengths to
//!   progression stages and labels, plus the daily logging transition
//! - **Sync Matrix**: the conjunctive time/activity/reflection gate that
//!   reveals friends' activity
//! - **The Current**: shared deep-focus session state
//! - **AppState**: the one mutable container; every mutation returns an
//!   [`Event`]
//!
//! All clocks are injected: rule functions take a `DateTime<FixedOffset>`
//! so the calendar-day definition belongs to the caller, never to an
//! ambient system call.
//!
//! ## Key Components
//!
//! - [`HabitStage`]: streak-band classification
//! - [`Habit`]: streak state and the logging transition
//! - [`GateStatus`]: which gate is blocking, or unlocked
//! - [`AppState`]: seeded, single-writer application state
//! - [`SyncConfig`]: TOML-backed configuration

pub mod config;
pub mod current;
pub mod error;
pub mod events;
pub mod habit;
pub mod haptics;
pub mod matrix;
pub mod seed;
pub mod stage;
pub mod state;
pub mod user;

pub use config::SyncConfig;
pub use current::FocusSession;
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use events::Event;
pub use habit::{Habit, HabitStatus, LogOutcome};
pub use haptics::HapticPattern;
pub use matrix::GateStatus;
pub use stage::{identity_label, stage_label, HabitStage};
pub use state::AppState;
pub use user::User;
