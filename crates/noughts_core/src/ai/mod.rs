//! Computer opponent.
//!
//! [`MoveSelector`] picks a square for the computer's mark at one of three
//! strengths. Selection never changes the board it is given: trial
//! placements happen on a scratch copy and are undone by a scoped guard.

mod balanced;
mod minimax;
mod random;
mod trial;
mod weak;

pub use balanced::{balanced_move, winning_move};
pub use minimax::{MoveScore, WIN_SCORE, best_move, score_moves};
pub use random::{FixedSequence, RandomIndex, RngIndex};
pub use weak::weak_move;

use crate::types::{Board, Player};
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum Tier {
    /// Uniformly random empty square.
    Weak,
    /// Win, block, center, corner, then random.
    Balanced,
    /// Exhaustive minimax. Never loses.
    Optimal,
}

impl Tier {
    /// Parses a tier name, accepting `easy`/`medium`/`hard` as aliases.
    ///
    /// Unrecognized names fall back to [`Tier::Weak`].
    #[instrument]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "weak" | "easy" => Tier::Weak,
            "balanced" | "medium" => Tier::Balanced,
            "optimal" | "hard" => Tier::Optimal,
            other => {
                warn!(tier = other, "Unknown tier, falling back to weak");
                Tier::Weak
            }
        }
    }
}

impl FromStr for Tier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for Tier {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Tier {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        tier.to_string()
    }
}

/// Chooses moves for the computer player.
///
/// The random source only matters for the weak tier and the balanced
/// tier's corner rule; inject a [`FixedSequence`] for deterministic play.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = RngIndex<ThreadRng>> {
    rng: R,
}

impl MoveSelector {
    /// Selector backed by the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: RngIndex::thread(),
        }
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomIndex> MoveSelector<R> {
    /// Selector backed by the given random source.
    pub fn with_random(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the square `mark` should occupy next.
    ///
    /// The result is always an empty square of `board`. `None` means the
    /// board was already full, which callers should not ask about.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn select_move(&mut self, board: &Board, mark: Player, tier: Tier) -> Option<usize> {
        if board.is_full() {
            warn!("Move requested on a full board");
            return None;
        }

        let choice = match tier {
            Tier::Weak => weak_move(board, &mut self.rng),
            Tier::Balanced => balanced_move(board, mark, &mut self.rng),
            Tier::Optimal => best_move(board, mark),
        };

        debug_assert!(choice.is_some_and(|pos| board.is_empty(pos)));
        debug!(?choice, "Selected move");
        choice
    }
}

/// Selects a move using the process-wide random generator.
pub fn select_move(board: &Board, mark: Player, tier: Tier) -> Option<usize> {
    MoveSelector::new().select_move(board, mark, tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_names() {
        assert_eq!(Tier::from_name("Optimal"), Tier::Optimal);
        assert_eq!(Tier::from_name("medium"), Tier::Balanced);
        assert_eq!(Tier::from_name("easy"), Tier::Weak);
        assert_eq!(Tier::Balanced.to_string(), "balanced");
    }

    #[test]
    fn test_unknown_tier_falls_back_to_weak() {
        assert_eq!(Tier::from_name("grandmaster"), Tier::Weak);
        assert_eq!("".parse::<Tier>(), Ok(Tier::Weak));
    }

    #[test]
    fn test_full_board_yields_none() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        let mut selector = MoveSelector::with_random(FixedSequence::default());
        assert_eq!(selector.select_move(&board, Player::X, Tier::Balanced), None);
    }
}
