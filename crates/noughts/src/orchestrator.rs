//! Game orchestration between players.

use crate::events::{GameEvent, emit};
use crate::players::{Player, PlayerKind};
use anyhow::{Context, Result};
use noughts_core::{Board, Mark, Outcome, Square, evaluate};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Runs one game between two players. X always moves first.
pub struct Orchestrator {
    board: Board,
    to_move: Mark,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator on an empty board.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            player_x,
            player_o,
            events,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn emit(&self, event: GameEvent) {
        emit(&self.events, event);
    }

    fn computer_mark(&self) -> Option<Mark> {
        match (self.player_x.kind(), self.player_o.kind()) {
            (PlayerKind::Computer, PlayerKind::Human) => Some(Mark::X),
            (PlayerKind::Human, PlayerKind::Computer) => Some(Mark::O),
            _ => None,
        }
    }

    /// Runs the game loop to completion and returns the outcome.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game orchestration"
        );

        loop {
            let outcome = evaluate(&self.board);
            if outcome.is_decided() {
                info!(%outcome, board = %self.board, "Game over");
                self.emit(GameEvent::GameOver {
                    outcome,
                    board: self.board.clone(),
                    computer: self.computer_mark(),
                });
                return Ok(outcome);
            }

            let mark = self.to_move;
            let player = match mark {
                Mark::X => &self.player_x,
                Mark::O => &self.player_o,
            };
            let (name, kind) = (player.name().to_string(), player.kind());

            self.emit(GameEvent::TurnStarted {
                mark,
                name: name.clone(),
                kind,
                board: self.board.clone(),
            });
            if kind == PlayerKind::Computer {
                self.emit(GameEvent::ComputerThinking { mark });
            }

            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let position = player
                .get_move(&self.board, mark)
                .await
                .with_context(|| format!("{} failed to produce a move", name))?;

            if !self.board.is_empty(position) {
                if kind == PlayerKind::Computer {
                    anyhow::bail!("Computer chose unavailable square {}", position);
                }
                warn!(position, "Player chose unavailable square");
                self.emit(GameEvent::MoveRejected {
                    mark,
                    reason: format!("Square {} is not available", position + 1),
                });
                continue;
            }

            self.board.set(position, Square::Occupied(mark))?;
            debug!(%mark, position, "Move applied");
            self.emit(GameEvent::MoveMade {
                mark,
                position,
                board: self.board.clone(),
            });
            self.to_move = mark.opponent();
        }
    }
}
