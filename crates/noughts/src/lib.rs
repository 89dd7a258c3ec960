//! Noughts - terminal tic-tac-toe
//!
//! Game loop, players and settings around the `noughts_core` rules engine.
//!
//! # Architecture
//!
//! - **Players**: humans typing at the console, computers using the move selector
//! - **Orchestrator**: runs one game and reports every step as a [`GameEvent`]
//! - **Match**: consecutive games with a running [`Scoreboard`]
//! - **Render**: a single task that prints events to stdout
//!
//! # Example
//!
//! ```no_run
//! use noughts::{ComputerPlayer, Orchestrator};
//! use noughts_core::Tier;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let x = ComputerPlayer::new("X", Tier::Optimal, Duration::ZERO);
//! let o = ComputerPlayer::new("O", Tier::Optimal, Duration::ZERO);
//! let outcome = Orchestrator::new(Box::new(x), Box::new(o), tx).run().await?;
//! assert!(outcome.is_draw());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod events;
mod input;
mod mode;
mod orchestrator;
mod players;
mod render;
mod scoreboard;
mod session;

// Crate-level exports - Settings
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings, ThinkingDelays};

// Crate-level exports - Game loop
pub use events::{GameEvent, emit};
pub use input::Console;
pub use mode::GameMode;
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerKind};

// Crate-level exports - Output
pub use render::{board_grid, render, spawn_renderer};

// Crate-level exports - Scores and sessions
pub use scoreboard::Scoreboard;
pub use session::{Match, MenuCommand, computer_series};
