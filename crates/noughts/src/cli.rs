//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::GameMode;
use noughts_core::{Board, Mark, Tier};

/// Noughts - tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with a selectable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Game mode (two-player or vs-computer)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Computer strength (weak, balanced, optimal)
        #[arg(short, long)]
        tier: Option<Tier>,

        /// Mark the computer plays
        #[arg(long)]
        computer_mark: Option<Mark>,

        /// Path to settings file
        #[arg(short, long, default_value = noughts::DEFAULT_CONFIG_FILE)]
        config: std::path::PathBuf,
    },

    /// Print the square the computer would pick
    Suggest {
        /// Board as nine characters, e.g. "XX.OO...."
        #[arg(short, long)]
        board: Board,

        /// Mark to move
        #[arg(short, long)]
        mark: Mark,

        /// Computer strength
        #[arg(short, long, default_value = "optimal")]
        tier: Tier,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the verdict and minimax score of every empty square
    Analyze {
        /// Board as nine characters
        #[arg(short, long)]
        board: Board,

        /// Mark to move
        #[arg(short, long)]
        mark: Mark,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Pit two computer tiers against each other
    Bench {
        /// Tier playing X
        #[arg(long, default_value = "optimal")]
        x: Tier,

        /// Tier playing O
        #[arg(long, default_value = "optimal")]
        o: Tier,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
