//! freeboard CLI - Command-line interface
//!
//! Commands:
//! - show: print a position, optionally replayed from pasted notation
//! - play: interactive board session

use clap::{Parser, Subcommand};

mod play;
mod render;
mod session;
mod show;

#[derive(Parser)]
#[command(name = "freeboard")]
#[command(about = "Free-move chess board with move recording and replay")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a position, optionally replayed from pasted notation
    Show(show::ShowArgs),
    /// Start an interactive board session
    Play(play::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Play(args) => play::run(args),
    }
}
