use clap::Args;

use super::{clock, seeded_state};

#[derive(Args)]
pub struct MirrorArgs {
    /// Override the current hour of day (0-23)
    #[arg(long)]
    pub hour: Option<u32>,
    /// Print the viewer as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: MirrorArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = clock(args.hour)?;
    let state = seeded_state(now)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state.user)?);
        return Ok(());
    }

    println!("THE MIRROR");
    for habit in &state.user.habits {
        let mut markers = Vec::new();
        if habit.is_done_today(now) {
            markers.push("done");
        }
        if habit.is_stasis() {
            markers.push("at risk");
        }
        let markers = if markers.is_empty() {
            String::new()
        } else {
            format!("  [{}]", markers.join(", "))
        };

        println!();
        println!("  {}{markers}", habit.headline());
        println!(
            "  {} | {} | Day {}",
            habit.name,
            habit.stage().label(),
            habit.streak_days
        );
    }

    if let Some(win) = &state.user.daily_win {
        println!();
        println!("  Daily victory: \"{win}\"");
    }
    Ok(())
}
