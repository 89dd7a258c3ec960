//! Human player reading cell numbers from the console.

use super::{Player, PlayerKind};
use crate::events::{GameEvent, emit};
use crate::input::Console;
use anyhow::Result;
use noughts_core::{Board, Mark};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Human player typing `1`-`9`.
pub struct HumanPlayer {
    name: String,
    console: Console,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        console: Console,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            console,
            events,
        }
    }

    fn reject(&self, mark: Mark, reason: String) {
        debug!(player = %self.name, %reason, "Rejected input");
        emit(&self.events, GameEvent::MoveRejected { mark, reason });
    }
}

/// Parses a 1-based cell number into a board index.
pub(crate) fn parse_cell(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n @ 1..=9) => Some(n - 1),
        _ => None,
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        loop {
            let Some(line) = self.console.next_line().await? else {
                anyhow::bail!("Input closed");
            };

            match parse_cell(&line) {
                Some(pos) if board.is_empty(pos) => return Ok(pos),
                Some(pos) => self.reject(mark, format!("Square {} is already taken", pos + 1)),
                None => self.reject(mark, format!("{:?} is not a square (1-9)", line)),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("1"), Some(0));
        assert_eq!(parse_cell(" 9 "), Some(8));
        assert_eq!(parse_cell("0"), None);
        assert_eq!(parse_cell("10"), None);
        assert_eq!(parse_cell("x"), None);
    }

    #[tokio::test]
    async fn test_rejects_until_valid() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let console = Console::from_reader(&b"banana\n5\n6\n"[..]);
        let mut human = HumanPlayer::new("Alice", console, tx);
        let board: Board = "....X....".parse().unwrap();

        let pos = human.get_move(&board, Mark::O).await.unwrap();
        assert_eq!(pos, 5);

        let rejected: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(rejected.len(), 2);
        assert!(matches!(
            &rejected[1],
            GameEvent::MoveRejected { reason, .. } if reason.contains("taken")
        ));
    }

    #[tokio::test]
    async fn test_end_of_input_is_error() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let console = Console::from_reader(&b""[..]);
        let mut human = HumanPlayer::new("Bob", console, tx);
        assert!(human.get_move(&Board::new(), Mark::X).await.is_err());
    }
}
