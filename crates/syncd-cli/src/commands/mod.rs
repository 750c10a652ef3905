//! CLI command implementations.
//!
//! State is volatile by design: every invocation rebuilds the seeded
//! state, and `--hour` overrides the wall clock the same way the
//! mockup's debug time toggle did.

pub mod config;
pub mod current;
pub mod jolt;
pub mod log;
pub mod mirror;
pub mod tribe;
pub mod win;

use chrono::{DateTime, FixedOffset, Local, Timelike, Utc};
use syncd_core::{AppState, Event, SyncConfig};

/// Current local time, optionally pinned to a specific hour of day.
pub fn clock(hour: Option<u32>) -> Result<DateTime<FixedOffset>, Box<dyn std::error::Error>> {
    let now = Local::now().fixed_offset();
    match hour {
        Some(h) => now
            .with_hour(h)
            .and_then(|t| t.with_minute(30))
            .and_then(|t| t.with_second(0))
            .ok_or_else(|| format!("invalid hour: {h}").into()),
        None => Ok(now),
    }
}

/// Seeded state under the persisted configuration.
pub fn seeded_state(now: DateTime<FixedOffset>) -> Result<AppState, Box<dyn std::error::Error>> {
    let config = SyncConfig::load()?;
    let mut state = AppState::seeded(config, now.with_timezone(&Utc));
    state.refresh(now);
    Ok(state)
}

/// Print the haptic pattern an event maps to, when haptics are on.
pub fn report_haptics(state: &AppState, event: &Event) {
    if !state.config.haptics.enabled {
        return;
    }
    if let Some(pattern) = syncd_core::haptics::for_event(event) {
        println!("haptic: {} {:?}", pattern.description(), pattern.pulses());
    }
}
