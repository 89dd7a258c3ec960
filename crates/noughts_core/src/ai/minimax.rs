//! Optimal tier: exhaustive minimax over the remaining game tree.
//!
//! No pruning. From any mid-game position the tree is small enough to walk
//! completely, and the unpruned walk gives exact scores for every root move.

use super::trial::Trial;
use crate::outcome::Outcome;
use crate::rules::evaluate;
use crate::types::{Board, CELLS, Player};
use serde::{Deserialize, Serialize};

/// Score of a terminal win, reduced by one per ply searched.
pub const WIN_SCORE: i32 = 10;

/// Minimax value of playing `position` from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveScore {
    /// Board index of the move.
    pub position: usize,
    /// `10 - depth` for a forced win, `depth - 10` for a forced loss, `0` for a draw.
    pub score: i32,
}

/// Scores every empty square for `mark`, in ascending index order.
///
/// The root placement itself is depth 0; each reply adds one ply.
pub fn score_moves(board: &Board, mark: Player) -> Vec<MoveScore> {
    let mut scratch = board.clone();
    board
        .empty_cells()
        .map(|position| {
            let mut trial = Trial::place(&mut scratch, position, mark);
            let score = minimax(&mut trial, 0, false, mark);
            MoveScore { position, score }
        })
        .collect()
}

/// Highest-scoring square for `mark`. Ties keep the lowest index.
pub fn best_move(board: &Board, mark: Player) -> Option<usize> {
    let mut best: Option<MoveScore> = None;
    for candidate in score_moves(board, mark) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }
    best.map(|b| b.position)
}

fn minimax(board: &mut Board, depth: i32, maximizing: bool, computer: Player) -> i32 {
    match evaluate(board) {
        Outcome::Win { mark, .. } if mark == computer => return WIN_SCORE - depth,
        Outcome::Win { .. } => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if maximizing {
        computer
    } else {
        computer.opponent()
    };

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in 0..CELLS {
        if !board.is_empty(pos) {
            continue;
        }
        let mut trial = Trial::place(board, pos, mover);
        let score = minimax(&mut trial, depth + 1, !maximizing, computer);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
