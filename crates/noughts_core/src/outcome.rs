//! Result of evaluating a board.

use super::rules::WinLine;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Verdict on a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    /// No three-in-a-row and at least one empty square.
    InProgress,
    /// `mark` completed `line`.
    Win {
        /// The winning mark.
        mark: Player,
        /// The line that was completed.
        line: WinLine,
    },
    /// Board full with no three-in-a-row.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, line } => write!(f, "Player {} wins on {}", mark, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
