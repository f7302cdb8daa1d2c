//! Floe CLI - Command-line interface for playing and simulating games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Floe - a deterministic sliding-penguin puzzle engine
#[derive(Parser, Debug)]
#[command(name = "floe")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive game with one human-controlled penguin
    Play {
        /// Random seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of rounds (default: 4)
        #[arg(short, long, default_value = "4")]
        rounds: u8,
    },

    /// Run a single AI-only game
    Run {
        /// Random seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of rounds (default: 4)
        #[arg(short, long, default_value = "4")]
        rounds: u8,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Watch a seeded AI game in a TUI
    Watch {
        /// Random seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of rounds (default: 4)
        #[arg(short, long, default_value = "4")]
        rounds: u8,

        /// Turn delay in milliseconds (default: 800)
        #[arg(long, default_value = "800")]
        speed: u64,
    },

    /// Run mass parallel games and aggregate statistics
    Sim {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of rounds per game (default: 4)
        #[arg(short, long, default_value = "4")]
        rounds: u8,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::SimFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { seed, rounds } => cli::play::execute(resolve_seed(seed), rounds),
        Commands::Run {
            seed,
            rounds,
            format,
            quiet,
        } => cli::run::execute(resolve_seed(seed), rounds, format, quiet),
        Commands::Watch {
            seed,
            rounds,
            speed,
        } => cli::watch::execute(resolve_seed(seed), rounds, speed),
        Commands::Sim {
            games,
            seed,
            rounds,
            format,
        } => cli::sim::execute(games, resolve_seed(seed), rounds, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Use the given seed, or derive one from the clock. Seed management lives
/// here; the engine itself never touches the environment.
#[allow(clippy::cast_possible_truncation)]
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}
