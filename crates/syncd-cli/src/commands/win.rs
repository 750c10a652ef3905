use clap::Args;

use super::{clock, report_haptics, seeded_state};

#[derive(Args)]
pub struct WinArgs {
    /// Your one true win today
    pub text: String,
    /// Override the current hour of day (0-23)
    #[arg(long)]
    pub hour: Option<u32>,
}

pub fn run(args: WinArgs) -> Result<(), Box<dyn std::error::Error>> {
    let now = clock(args.hour)?;
    let mut state = seeded_state(now)?;

    let event = state.declare_win(&args.text, now)?;
    println!("{}", serde_json::to_string_pretty(&event)?);
    println!("Sealed: \"{}\"", args.text);
    report_haptics(&state, &event);
    Ok(())
}
