//! Balanced tier: win, block, center, corner, anything.

use super::random::{RandomIndex, choose};
use super::trial::Trial;
use super::weak::weak_move;
use crate::position::Position;
use crate::rules::evaluate;
use crate::types::{Board, Player};
use tracing::debug;

/// First empty square (ascending) that completes a line for `player`.
pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
    let mut scratch = board.clone();
    for pos in board.empty_cells() {
        let trial = Trial::place(&mut scratch, pos, player);
        if evaluate(&trial).winner() == Some(player) {
            return Some(pos);
        }
    }
    None
}

/// Applies the balanced rules in order and returns the first that fires.
pub fn balanced_move<R: RandomIndex + ?Sized>(
    board: &Board,
    mark: Player,
    rng: &mut R,
) -> Option<usize> {
    if let Some(pos) = winning_move(board, mark) {
        debug!(pos, "Completing own line");
        return Some(pos);
    }

    if let Some(pos) = winning_move(board, mark.opponent()) {
        debug!(pos, "Blocking opponent line");
        return Some(pos);
    }

    let center = Position::Center.to_index();
    if board.is_empty(center) {
        debug!("Taking center");
        return Some(center);
    }

    let corners: Vec<usize> = Position::CORNERS
        .iter()
        .map(|pos| pos.to_index())
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(pos) = choose(rng, &corners) {
        debug!(pos, available = corners.len(), "Taking corner");
        return Some(pos);
    }

    weak_move(board, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::random::FixedSequence;

    #[test]
    fn test_winning_move_found() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(winning_move(&board, Player::O), Some(5));
        assert_eq!(winning_move(&board, Player::X), Some(2));
    }

    #[test]
    fn test_no_winning_move() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(winning_move(&board, Player::X), None);
    }

    #[test]
    fn test_corner_choice_uses_random_source() {
        // Center taken, corners 0 and 8 taken, nothing to win or block.
        let board: Board = "X...O...X".parse().unwrap();
        let mut rng = FixedSequence::new(vec![1]);
        assert_eq!(balanced_move(&board, Player::O, &mut rng), Some(6));
    }

    #[test]
    fn test_block_before_center() {
        let board: Board = "XX.......".parse().unwrap();
        let mut rng = FixedSequence::default();
        assert_eq!(balanced_move(&board, Player::O, &mut rng), Some(2));
    }

    #[test]
    fn test_center_when_quiet() {
        let board: Board = "X........".parse().unwrap();
        let mut rng = FixedSequence::default();
        assert_eq!(balanced_move(&board, Player::O, &mut rng), Some(4));
    }
}
