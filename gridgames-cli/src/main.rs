//! Grid Games
//!
//! Play tic-tac-toe against the heuristic computer player, connect four
//! against a friend, or benchmark the heuristic against random play.

mod bench;
mod config;
mod connect4;
mod console;
mod render;
mod stats;
mod tictactoe;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridgames_core::Player;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::console::Console;

/// Terminal tic-tac-toe and connect four.
#[derive(Parser)]
#[command(name = "gridgames")]
#[command(about = "Play tic-tac-toe and connect four in the terminal")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "gridgames.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play tic-tac-toe against the computer.
    Tictactoe {
        /// Let the computer make the first move.
        #[arg(long)]
        ai_first: bool,

        /// Random seed for the computer's tie-breaks.
        #[arg(long)]
        seed: Option<u64>,

        /// Show the heuristic score of each empty cell before your move.
        #[arg(long)]
        hint: bool,
    },

    /// Play connect four, two players at one terminal.
    Connect4,

    /// Play the computer against a random opponent and report the results.
    Bench {
        /// Number of games to play.
        #[arg(short, long)]
        games: Option<usize>,

        /// Random seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
    /// Input closed before the game finished.
    Abandoned,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match cli.command {
        Commands::Tictactoe { ai_first, seed, hint } => {
            let options = tictactoe::Options {
                ai_first: ai_first || config.tictactoe.ai_first,
                hint,
            };
            let mut rng = match seed.or(config.tictactoe.seed) {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_os_rng(),
            };
            let outcome = tictactoe::play(&mut console, &config.display, options, &mut rng)?;
            info!(?outcome, "tic-tac-toe finished");
        }

        Commands::Connect4 => {
            let outcome = connect4::play(&mut console, &config.display)
                .context("connect four session failed")?;
            info!(?outcome, "connect four finished");
        }

        Commands::Bench { games, seed } => {
            let games = games.unwrap_or(config.bench.games);
            if games == 0 {
                anyhow::bail!("--games must be > 0");
            }
            let seed = seed.unwrap_or(config.bench.seed);
            println!("Benchmarking heuristic AI over {games} games (seed {seed})");
            println!();

            let stats = bench::run(games, &mut ChaCha8Rng::seed_from_u64(seed));
            stats.print_summary();
        }
    }

    Ok(())
}
