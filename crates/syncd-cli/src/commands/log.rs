use clap::Args;

use super::{clock, report_haptics, seeded_state};

#[derive(Args)]
pub struct LogArgs {
    /// Habit to log, by display name
    pub habit: String,
    /// Optional private reflection note (kept as opaque text)
    #[arg(long)]
    pub note: Option<String>,
    /// Override the current hour of day (0-23)
    #[arg(long)]
    pub hour: Option<u32>,
}

pub fn run(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = clock(args.hour)?;
    let mut state = seeded_state(now)?;

    let habit = state
        .user
        .habit_by_name(&args.habit)
        .ok_or_else(|| format!("no habit named '{}'", args.habit))?;
    let was_stasis = habit.is_stasis();
    let id = habit.id;

    let event = state.log_habit(id, now)?;
    println!("{}", serde_json::to_string_pretty(&event)?);

    let habit = state.user.habit(id).expect("habit still present");
    println!("{}", habit.headline());
    if was_stasis {
        println!("Re-ignited. The path resumes at day {}.", habit.streak_days);
    }
    if let Some(note) = args.note {
        println!("note: {note}");
    }
    report_haptics(&state, &event);
    Ok(())
}
