//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates or retains the
//! board, and every board shape has a defined verdict, reachable or not.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinLine, check_winner};

use super::outcome::Outcome;
use super::types::Board;

/// Evaluates a board: the first completed line in [`WinLine::ALL`] order
/// wins, otherwise a full board is a draw, otherwise play continues.
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some((mark, line)) => Outcome::Win { mark, line },
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
