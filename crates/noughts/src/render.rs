//! Plain-text rendering of game events.

use crate::events::GameEvent;
use crate::players::PlayerKind;
use noughts_core::{Board, Mark, Outcome, Position, Square, WinLine};
use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Draws the board; squares on `highlight` are bracketed.
pub fn board_grid(board: &Board, highlight: Option<WinLine>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                let symbol = match board.get(pos) {
                    Some(Square::Occupied(mark)) => mark.to_string(),
                    _ => (pos + 1).to_string(),
                };
                if highlight.is_some_and(|line| line.contains(pos)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

fn result_banner(outcome: &Outcome, computer: Option<Mark>) -> String {
    match (outcome, computer) {
        (Outcome::Win { mark, .. }, Some(c)) if *mark == c => "Computer wins!".to_string(),
        (Outcome::Win { .. }, Some(_)) => "You win!".to_string(),
        (Outcome::Win { mark, .. }, None) => format!("Player {} wins!", mark),
        (Outcome::Draw, _) => "It's a draw!".to_string(),
        (Outcome::InProgress, _) => "Game abandoned".to_string(),
    }
}

/// Formats one event for the terminal.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted { mode, tier } => match tier {
            Some(tier) => format!("== New game: {} ({}) ==", mode.name(), tier),
            None => format!("== New game: {} ==", mode.name()),
        },
        GameEvent::TurnStarted {
            mark,
            name,
            kind,
            board,
        } => {
            let grid = board_grid(board, None);
            match kind {
                PlayerKind::Human => {
                    format!("\n{}\n\n{} ({}), choose a square 1-9:", grid, name, mark)
                }
                PlayerKind::Computer => format!("\n{}\n\n{} ({}) to move.", grid, name, mark),
            }
        }
        GameEvent::ComputerThinking { mark } => format!("Computer ({}) is thinking...", mark),
        GameEvent::MoveMade { mark, position, .. } => match Position::from_index(*position) {
            Some(named) => format!("{} played square {} ({}).", mark, position + 1, named),
            None => format!("{} played square {}.", mark, position + 1),
        },
        GameEvent::MoveRejected { reason, .. } => format!("{}. Try again:", reason),
        GameEvent::GameOver {
            outcome,
            board,
            computer,
        } => format!(
            "\n{}\n\n{}",
            board_grid(board, outcome.line()),
            result_banner(outcome, *computer)
        ),
        GameEvent::Scores(scores) => format!("Score  {}", scores),
        GameEvent::Notice(text) => text.clone(),
    }
}

fn write_event(event: &GameEvent) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", render(event))?;
    out.flush()
}

/// Prints events to stdout until every sender is dropped.
///
/// This task is the only writer to stdout, so output never interleaves.
pub fn spawn_renderer(mut events: mpsc::UnboundedReceiver<GameEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            debug!(?event, "Rendering event");
            if let Err(e) = write_event(&event) {
                warn!(error = %e, "Failed to write to stdout");
                break;
            }
        }
    })
}
