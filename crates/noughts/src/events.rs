//! Messages sent from the game loop to the renderer.

use crate::mode::GameMode;
use crate::players::PlayerKind;
use crate::scoreboard::Scoreboard;
use noughts_core::{Board, Mark, Outcome, Tier};
use tokio::sync::mpsc;
use tracing::debug;

/// Sends `event`; a closed receiver only means nobody is watching.
pub fn emit(events: &mpsc::UnboundedSender<GameEvent>, event: GameEvent) {
    if events.send(event).is_err() {
        debug!("Event receiver dropped");
    }
}

/// Something the terminal should show.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new game begins.
    GameStarted {
        /// Current mode.
        mode: GameMode,
        /// Computer strength, when a computer plays.
        tier: Option<Tier>,
    },
    /// It is `mark`'s turn.
    TurnStarted {
        /// Player to move.
        mark: Mark,
        /// Display name of that player.
        name: String,
        /// Human or computer.
        kind: PlayerKind,
        /// Board before the move.
        board: Board,
    },
    /// Computer is deciding.
    ComputerThinking {
        /// Computer's mark.
        mark: Mark,
    },
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        mark: Mark,
        /// Square index (0-8).
        position: usize,
        /// Board after the move.
        board: Board,
    },
    /// Input could not be used as a move.
    MoveRejected {
        /// Player whose input was rejected.
        mark: Mark,
        /// Why.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final verdict.
        outcome: Outcome,
        /// Final board.
        board: Board,
        /// Computer's mark, if one played (for "you win" wording).
        computer: Option<Mark>,
    },
    /// Tally after a game or reset.
    Scores(Scoreboard),
    /// Free-form prompt or notice.
    Notice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_after_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        emit(&tx, GameEvent::Notice("hello".to_string()));
        drop(rx);
        emit(&tx, GameEvent::Notice("nobody listening".to_string()));
        assert!(tx.is_closed());
    }
}
