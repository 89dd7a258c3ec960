//! Scoped trial placements.

use crate::types::{Board, Player, Square};
use std::ops::{Deref, DerefMut};

/// A mark placed on a scratch board for the lifetime of the guard.
///
/// Dropping the guard empties the square again, so every exit from a
/// search branch (including early returns) leaves the board as it was.
pub(crate) struct Trial<'a> {
    board: &'a mut Board,
    pos: usize,
}

impl<'a> Trial<'a> {
    /// Places `mark` at `pos`, which must be empty.
    pub(crate) fn place(board: &'a mut Board, pos: usize, mark: Player) -> Self {
        debug_assert!(board.is_empty(pos), "trial on occupied square {pos}");
        board.squares_mut()[pos] = Square::Occupied(mark);
        Self { board, pos }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.squares_mut()[self.pos] = Square::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_reverts_on_drop() {
        let mut board: Board = "X........".parse().unwrap();
        let before = board.clone();
        {
            let trial = Trial::place(&mut board, 4, Player::O);
            assert_eq!(trial.get(4), Some(Square::Occupied(Player::O)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_trials_revert() {
        let mut board = Board::new();
        {
            let mut outer = Trial::place(&mut board, 0, Player::X);
            let inner = Trial::place(&mut outer, 1, Player::O);
            assert_eq!(inner.count(Player::X) + inner.count(Player::O), 2);
        }
        assert_eq!(board, Board::new());
    }
}
