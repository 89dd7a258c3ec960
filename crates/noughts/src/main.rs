//! Noughts - Unified CLI
//!
//! Interactive play plus a few commands for inspecting the computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{
    Console, GameEvent, GameMode, Match, MenuCommand, Settings, computer_series, emit,
    spawn_renderer,
};
use noughts_core::{Board, Mark, MoveSelector, RngIndex, Tier, evaluate, score_moves};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            tier,
            computer_mark,
            config,
        } => run_play(mode, tier, computer_mark, config).await,
        Command::Suggest {
            board,
            mark,
            tier,
            seed,
        } => run_suggest(board, mark, tier, seed),
        Command::Analyze { board, mark, json } => run_analyze(board, mark, json),
        Command::Bench { x, o, games, seed } => run_bench(x, o, games, seed).await,
    }
}

/// Interactive games until the player quits or input ends.
#[instrument(skip_all, fields(config = %config.display()))]
async fn run_play(
    mode: Option<GameMode>,
    tier: Option<Tier>,
    computer_mark: Option<Mark>,
    config: PathBuf,
) -> Result<()> {
    let settings = Settings::load_or_default(&config)?.with_overrides(mode, tier, computer_mark);
    info!(mode = %settings.mode(), tier = %settings.tier(), "Starting interactive play");

    let (tx, rx) = mpsc::unbounded_channel();
    let renderer = spawn_renderer(rx);
    let console = Console::stdin();
    let mut game = Match::new(&settings);

    'games: loop {
        game.play_game(&console, &tx).await?;

        loop {
            emit(&tx, GameEvent::Notice(MenuCommand::HELP.to_string()));
            let Some(line) = console.next_line().await? else {
                debug!("Input closed at menu");
                break 'games;
            };
            match MenuCommand::parse(&line) {
                Some(command) => {
                    if !game.apply(command) {
                        break 'games;
                    }
                    if command != MenuCommand::NewGame {
                        emit(&tx, GameEvent::Scores(*game.scores()));
                    }
                    break;
                }
                None => {
                    emit(&tx, GameEvent::Notice(format!("Unknown command: {}", line)));
                }
            }
        }
    }

    emit(&tx, GameEvent::Notice(format!("Final score  {}", game.scores())));
    drop(tx);
    renderer.await?;
    Ok(())
}

/// Prints the 1-based square the selector picks.
#[instrument]
fn run_suggest(board: Board, mark: Mark, tier: Tier, seed: Option<u64>) -> Result<()> {
    let choice = match seed {
        Some(seed) => {
            MoveSelector::with_random(RngIndex::seeded(seed)).select_move(&board, mark, tier)
        }
        None => MoveSelector::new().select_move(&board, mark, tier),
    };

    match choice {
        Some(pos) => println!("{}", pos + 1),
        None => anyhow::bail!("Board {} has no empty squares", board),
    }
    Ok(())
}

/// Prints the verdict and per-square minimax scores.
#[instrument]
fn run_analyze(board: Board, mark: Mark, json: bool) -> Result<()> {
    let outcome = evaluate(&board);
    let scores = if outcome.is_decided() {
        Vec::new()
    } else {
        score_moves(&board, mark)
    };
    let best = noughts_core::best_move(&board, mark).filter(|_| !outcome.is_decided());

    if json {
        let report = serde_json::json!({
            "board": board.to_string(),
            "to_move": mark,
            "outcome": outcome,
            "scores": scores,
            "best": best,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    println!("Outcome: {}", outcome);
    for s in &scores {
        let marker = if Some(s.position) == best { "  <- best" } else { "" };
        println!("  square {}: {:>3}{}", s.position + 1, s.score, marker);
    }
    Ok(())
}

/// Plays computer against computer and prints the tally.
#[instrument]
async fn run_bench(x: Tier, o: Tier, games: u32, seed: Option<u64>) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let drain = tokio::spawn(async move { while rx.recv().await.is_some() {} });

    let scores = computer_series(x, o, games, seed, tx).await?;
    drain.await?;

    println!("X ({}) vs O ({}), {} games", x, o, scores.games_played());
    println!("{}", scores);
    Ok(())
}
