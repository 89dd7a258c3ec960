//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use noughts_core::{Board, Mark};

/// Whether a seat is filled by a person or the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PlayerKind {
    /// Types moves at the terminal.
    Human,
    /// Moves chosen by the move selector.
    Computer,
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the position (0-8) for the next move.
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns whether this is a human or computer seat.
    fn kind(&self) -> PlayerKind;
}
