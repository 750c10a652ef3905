use chrono::Utc;
use clap::Subcommand;
use syncd_core::current::{format_elapsed, synced_count};

use super::{clock, report_haptics, seeded_state};

#[derive(Subcommand)]
pub enum CurrentAction {
    /// Enter the Current
    Join {
        /// What this session is for
        #[arg(long)]
        intention: String,
        /// How completion will be verified
        #[arg(long)]
        verification: String,
        /// Override the current hour of day (0-23)
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Leave the Current
    Leave {
        /// Override the current hour of day (0-23)
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Who is in the stream right now
    Status {
        /// Override the current hour of day (0-23)
        #[arg(long)]
        hour: Option<u32>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CurrentAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CurrentAction::Join {
            intention,
            verification,
            hour,
        } => {
            let now = clock(hour)?;
            let mut state = seeded_state(now)?;
            let event = state.join_current(&intention, &verification, now)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            println!(
                "{} SYNCED",
                synced_count(&state.user, &state.friends)
            );
            report_haptics(&state, &event);
        }
        CurrentAction::Leave { hour } => {
            let now = clock(hour)?;
            let mut state = seeded_state(now)?;
            // Seeded state starts idle, so this reports NoActiveSession
            // unless the host wired in a live session.
            let event = state.leave_current(now)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        CurrentAction::Status { hour, json } => {
            let now = clock(hour)?;
            let state = seeded_state(now)?;
            let now_utc = now.with_timezone(&Utc);

            if json {
                let participants: Vec<_> = state
                    .active_friends()
                    .map(|f| {
                        serde_json::json!({
                            "name": f.name,
                            "intention": f.focus_session.intention(),
                            "elapsed": format_elapsed(
                                f.focus_session.elapsed(now_utc).num_seconds()
                            ),
                        })
                    })
                    .collect();
                let payload = serde_json::json!({
                    "synced": synced_count(&state.user, &state.friends),
                    "you": state.user.focus_session,
                    "friends": participants,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
                return Ok(());
            }

            println!("THE CURRENT");
            let total = synced_count(&state.user, &state.friends);
            if state.user.focus_session.is_active() {
                println!(
                    "  YOU  {}  {}",
                    format_elapsed(state.user.focus_session.elapsed(now_utc).num_seconds()),
                    state.user.focus_session.intention().unwrap_or_default()
                );
            }
            for friend in state.active_friends() {
                println!(
                    "  {}  {}  {}",
                    friend.name.to_uppercase(),
                    format_elapsed(friend.focus_session.elapsed(now_utc).num_seconds()),
                    friend.focus_session.intention().unwrap_or_default()
                );
            }
            if total > 0 {
                println!("  {total} in flow");
            } else {
                println!("  Quiet");
            }
        }
    }
    Ok(())
}
