//! Weak tier: uniform choice among empty squares.

use super::random::{RandomIndex, choose};
use crate::types::Board;

/// Picks any empty square uniformly. `None` on a full board.
pub fn weak_move<R: RandomIndex + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty: Vec<usize> = board.empty_cells().collect();
    choose(rng, &empty)
}
