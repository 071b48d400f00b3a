//! Hexapawn CLI - Exact solver and policy network trainer
//!
//! This CLI provides a unified interface for:
//! - Solving the game tree and exporting the optimal policy
//! - Training a neural network to imitate the optimal policy
//! - Replaying the optimal line of play

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(version, about = "Hexapawn solver and policy network", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate states and compute the optimal policy
    Solve(hexapawn::cli::commands::solve::SolveArgs),

    /// Train the policy network on the optimal policy
    Train(Box<hexapawn::cli::commands::train::TrainArgs>),

    /// Replay the optimal line of play
    Play(hexapawn::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Train(args) if args.verbose);
    hexapawn::cli::init_tracing(verbose)?;

    match cli.command {
        Commands::Solve(args) => hexapawn::cli::commands::solve::execute(args),
        Commands::Train(args) => hexapawn::cli::commands::train::execute(*args),
        Commands::Play(args) => hexapawn::cli::commands::play::execute(args),
    }
}
