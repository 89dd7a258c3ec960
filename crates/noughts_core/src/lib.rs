//! Tic-tac-toe rules and computer opponent.
//!
//! Two pure operations sit at the heart of the crate:
//!
//! - [`evaluate`] decides whether a board is won (and on which line),
//!   drawn, or still in progress.
//! - [`MoveSelector::select_move`] picks the square the computer plays
//!   next, at [`Tier::Weak`], [`Tier::Balanced`] or [`Tier::Optimal`]
//!   strength.
//!
//! Neither keeps state between calls. The caller owns the board, applies
//! moves and decides whose turn it is.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Outcome, Player, Tier, evaluate, select_move};
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! assert_eq!(select_move(&board, Player::O, Tier::Balanced), Some(5));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod outcome;
mod position;
mod rules;
mod types;

pub use ai::{
    FixedSequence, MoveScore, MoveSelector, RandomIndex, RngIndex, Tier, WIN_SCORE, balanced_move,
    best_move, score_moves, select_move, weak_move, winning_move,
};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{WinLine, check_winner, evaluate, is_full};
pub use types::{Board, BoardError, CELLS, Player, Square};

/// Alias for clarity where a player is only a symbol on the board.
pub type Mark = Player;
