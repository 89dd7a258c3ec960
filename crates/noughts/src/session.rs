//! A series of games with a running score.

use crate::config::{Settings, ThinkingDelays};
use crate::events::{GameEvent, emit};
use crate::input::Console;
use crate::mode::GameMode;
use crate::orchestrator::Orchestrator;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use crate::scoreboard::Scoreboard;
use anyhow::Result;
use noughts_core::{Mark, Outcome, Tier};
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// What to do between games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Start another game.
    NewGame,
    /// Zero the scoreboard and start another game.
    ResetScores,
    /// Switch mode. Resets scores.
    SetMode(GameMode),
    /// Switch computer strength. Scores are kept.
    SetTier(Tier),
    /// Computer takes the other mark. Resets scores.
    SwapMarks,
    /// Leave.
    Quit,
}

impl MenuCommand {
    /// Help text listing every command.
    pub const HELP: &'static str = "[Enter] new game  [r] reset scores  \
         [m <two-player|vs-computer>] mode  [t <weak|balanced|optimal>] tier  \
         [s] swap marks  [q] quit";

    /// Parses a menu line. An empty line starts a new game.
    pub fn parse(input: &str) -> Option<Self> {
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or("").to_ascii_lowercase();
        let arg = words.next();
        match (command.as_str(), arg) {
            ("" | "n" | "new", None) => Some(MenuCommand::NewGame),
            ("r" | "reset", None) => Some(MenuCommand::ResetScores),
            ("m" | "mode", Some(mode)) => mode.parse().ok().map(MenuCommand::SetMode),
            ("t" | "tier", Some(tier)) => Some(MenuCommand::SetTier(Tier::from_name(tier))),
            ("s" | "swap", None) => Some(MenuCommand::SwapMarks),
            ("q" | "quit" | "exit", None) => Some(MenuCommand::Quit),
            _ => None,
        }
    }
}

/// Current mode, strength and score across consecutive games.
#[derive(Debug, Clone)]
pub struct Match {
    mode: GameMode,
    tier: Tier,
    computer_mark: Mark,
    delays: ThinkingDelays,
    scores: Scoreboard,
}

impl Match {
    /// Starts a match from settings with a zero score.
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: *settings.mode(),
            tier: *settings.tier(),
            computer_mark: *settings.computer_mark(),
            delays: *settings.delays(),
            scores: Scoreboard::new(),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current computer strength.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Mark the computer plays in [`GameMode::VsComputer`].
    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    /// Scores so far.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Records a finished game.
    pub fn record(&mut self, outcome: &Outcome) {
        self.scores.record(outcome);
    }

    /// Zeroes the scoreboard.
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Applies a between-games command. Returns false for [`MenuCommand::Quit`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: MenuCommand) -> bool {
        match command {
            MenuCommand::NewGame => {}
            MenuCommand::ResetScores => self.reset_scores(),
            MenuCommand::SetMode(mode) => {
                self.mode = mode;
                self.reset_scores();
            }
            MenuCommand::SetTier(tier) => self.tier = tier,
            MenuCommand::SwapMarks => {
                self.computer_mark = self.computer_mark.opponent();
                self.reset_scores();
            }
            MenuCommand::Quit => return false,
        }
        info!(
            mode = %self.mode,
            tier = %self.tier,
            computer = %self.computer_mark,
            "Match updated"
        );
        true
    }

    /// Seats for X and O in the current mode.
    pub fn seats(
        &self,
        console: &Console,
        events: &mpsc::UnboundedSender<GameEvent>,
    ) -> (Box<dyn Player>, Box<dyn Player>) {
        let human = |name: &str| -> Box<dyn Player> {
            Box::new(HumanPlayer::new(name, console.clone(), events.clone()))
        };

        match self.mode {
            GameMode::TwoPlayer => (human("Player X"), human("Player O")),
            GameMode::VsComputer => {
                let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
                    "Computer",
                    self.tier,
                    self.delays.for_tier(self.tier),
                ));
                match self.computer_mark {
                    Mark::X => (computer, human("You")),
                    Mark::O => (human("You"), computer),
                }
            }
        }
    }

    /// Plays one game on the console and records the result.
    #[instrument(skip_all, fields(mode = %self.mode))]
    pub async fn play_game(
        &mut self,
        console: &Console,
        events: &mpsc::UnboundedSender<GameEvent>,
    ) -> Result<Outcome> {
        let tier = (self.mode == GameMode::VsComputer).then_some(self.tier);
        emit(
            events,
            GameEvent::GameStarted {
                mode: self.mode,
                tier,
            },
        );

        let (player_x, player_o) = self.seats(console, events);
        let outcome = Orchestrator::new(player_x, player_o, events.clone())
            .run()
            .await?;

        self.record(&outcome);
        emit(events, GameEvent::Scores(self.scores));
        Ok(outcome)
    }
}

/// Plays `games` computer-vs-computer games without delays.
///
/// With a seed, each game's players are seeded from it so the whole
/// series is reproducible.
#[instrument(skip(events))]
pub async fn computer_series(
    x_tier: Tier,
    o_tier: Tier,
    games: u32,
    seed: Option<u64>,
    events: mpsc::UnboundedSender<GameEvent>,
) -> Result<Scoreboard> {
    let mut scores = Scoreboard::new();
    for game in 0..games {
        let player = |name: &str, tier: Tier, offset: u64| -> Box<dyn Player> {
            match seed {
                Some(seed) => Box::new(ComputerPlayer::seeded(
                    name,
                    tier,
                    Default::default(),
                    seed.wrapping_add(u64::from(game) * 2 + offset),
                )),
                None => Box::new(ComputerPlayer::new(name, tier, Default::default())),
            }
        };
        let outcome = Orchestrator::new(
            player("Computer X", x_tier, 0),
            player("Computer O", o_tier, 1),
            events.clone(),
        )
        .run()
        .await?;
        scores.record(&outcome);
    }
    info!(%scores, "Series finished");
    Ok(scores)
}
