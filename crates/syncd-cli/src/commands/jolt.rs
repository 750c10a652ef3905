use clap::Args;

use super::{clock, report_haptics, seeded_state};

#[derive(Args)]
pub struct JoltArgs {
    /// Friend to jolt, by name
    pub friend: String,
    /// Log this habit first (state is volatile, so the jolt ritual can
    /// be completed in one invocation)
    #[arg(long)]
    pub log: Option<String>,
    /// Declare this daily win first
    #[arg(long)]
    pub win: Option<String>,
    /// Override the current hour of day (0-23)
    #[arg(long)]
    pub hour: Option<u32>,
}

pub fn run(args: JoltArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = clock(args.hour)?;
    let mut state = seeded_state(now)?;

    if let Some(habit) = &args.log {
        let id = state
            .user
            .habit_by_name(habit)
            .map(|h| h.id)
            .ok_or_else(|| format!("no habit named '{habit}'"))?;
        state.log_habit(id, now)?;
    }
    if let Some(win) = &args.win {
        state.declare_win(win, now)?;
    }

    let friend_id = state
        .friend_by_name(&args.friend)
        .map(|f| f.id)
        .ok_or_else(|| format!("no friend named '{}'", args.friend))?;

    let event = state.jolt(friend_id, now)?;
    println!("{}", serde_json::to_string_pretty(&event)?);
    report_haptics(&state, &event);
    Ok(())
}
