//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Three board indices that win when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Row 0-1-2.
    pub const TOP_ROW: WinLine = WinLine([0, 1, 2]);
    /// Row 3-4-5.
    pub const MIDDLE_ROW: WinLine = WinLine([3, 4, 5]);
    /// Row 6-7-8.
    pub const BOTTOM_ROW: WinLine = WinLine([6, 7, 8]);
    /// Column 0-3-6.
    pub const LEFT_COLUMN: WinLine = WinLine([0, 3, 6]);
    /// Column 1-4-7.
    pub const CENTER_COLUMN: WinLine = WinLine([1, 4, 7]);
    /// Column 2-5-8.
    pub const RIGHT_COLUMN: WinLine = WinLine([2, 5, 8]);
    /// Diagonal 0-4-8.
    pub const MAIN_DIAGONAL: WinLine = WinLine([0, 4, 8]);
    /// Diagonal 2-4-6.
    pub const ANTI_DIAGONAL: WinLine = WinLine([2, 4, 6]);

    /// Every winning line, in scan order: rows, then columns, then diagonals.
    pub const ALL: [WinLine; 8] = [
        Self::TOP_ROW,
        Self::MIDDLE_ROW,
        Self::BOTTOM_ROW,
        Self::LEFT_COLUMN,
        Self::CENTER_COLUMN,
        Self::RIGHT_COLUMN,
        Self::MAIN_DIAGONAL,
        Self::ANTI_DIAGONAL,
    ];

    /// The three indices of this line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: usize) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the mark holding all three squares, if any.
    pub fn holder(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let sq = board.get(a)?;
        if sq != Square::Empty && Some(sq) == board.get(b) && Some(sq) == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first completed line in [`WinLine::ALL`] order.
/// Boards with several completed lines cannot arise in legal play; they
/// still resolve to the earliest line.
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    WinLine::ALL
        .iter()
        .find_map(|line| line.holder(board).map(|player| (player, *line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(check_winner(&board), Some((Player::X, WinLine::TOP_ROW)));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O...O...O".parse().unwrap();
        assert_eq!(
            check_winner(&board),
            Some((Player::O, WinLine::MAIN_DIAGONAL))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Column 0 and the main diagonal are both complete.
        let board: Board = "X..XX.X.X".parse().unwrap();
        assert_eq!(
            check_winner(&board),
            Some((Player::X, WinLine::LEFT_COLUMN))
        );
    }
}
