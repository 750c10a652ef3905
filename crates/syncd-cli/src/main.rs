use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "syncd-cli", version, about = "SYNCD CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Your habits: headlines, stages, streaks
    Mirror(commands::mirror::MirrorArgs),
    /// The tribe: friends' activity behind the Sync Matrix
    Tribe(commands::tribe::TribeArgs),
    /// Log a habit for today
    Log(commands::log::LogArgs),
    /// Declare your daily win
    Win(commands::win::WinArgs),
    /// The Current: shared deep-focus stream
    Current {
        #[command(subcommand)]
        action: commands::current::CurrentAction,
    },
    /// Jolt a friend who still has habits to complete
    Jolt(commands::jolt::JoltArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Mirror(args) => commands::mirror::run(args),
        Commands::Tribe(args) => commands::tribe::run(args),
        Commands::Log(args) => commands::log::run(args),
        Commands::Win(args) => commands::win::run(args),
        Commands::Current { action } => commands::current::run(action),
        Commands::Jolt(args) => commands::jolt::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
