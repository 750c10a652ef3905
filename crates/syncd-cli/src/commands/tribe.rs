use clap::Args;

use super::{clock, seeded_state};

#[derive(Args)]
pub struct TribeArgs {
    /// Override the current hour of day (0-23)
    #[arg(long)]
    pub hour: Option<u32>,
    /// Print gate status and friends as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TribeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = clock(args.hour)?;
    let state = seeded_state(now)?;
    let status = state.matrix_status(now);

    if args.json {
        let payload = serde_json::json!({
            "gate": status,
            "friends": if status.is_unlocked() {
                serde_json::to_value(&state.friends)?
            } else {
                serde_json::Value::Null
            },
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("THE TRIBE");
    if !status.is_unlocked() {
        for friend in &state.friends {
            println!();
            println!("  {}", friend.name.to_uppercase());
            for _ in &friend.habits {
                println!("    ........");
            }
        }
        println!();
        println!("  LOCKED: {}", status.prompt());
        return Ok(());
    }

    for friend in &state.friends {
        println!();
        println!("  {}", friend.name.to_uppercase());
        for habit in &friend.habits {
            let dot = if habit.is_done_today(now) { "*" } else { " " };
            println!(
                "  {dot} {} - {} (Day {})",
                habit.name,
                habit.stage().label(),
                habit.streak_days
            );
        }
        if let Some(win) = &friend.daily_win {
            println!("    \"{win}\"");
        }
        if friend.has_incomplete(now) {
            println!("    [jolt available]");
        }
    }
    Ok(())
}
