//! Settings loaded from a TOML file.

use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{Mark, Tier};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Game settings.
///
/// ```toml
/// mode = "vs-computer"
/// tier = "optimal"
/// computer_mark = "O"
///
/// [delays]
/// optimal_ms = 800
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Who plays against whom.
    #[serde(default)]
    mode: GameMode,

    /// Computer strength in [`GameMode::VsComputer`].
    #[serde(default = "default_tier")]
    tier: Tier,

    /// Mark the computer plays. X always moves first.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Pause before each computer move.
    #[serde(default)]
    delays: ThinkingDelays,
}

#[instrument]
fn default_tier() -> Tier {
    Tier::Balanced
}

#[instrument]
fn default_computer_mark() -> Mark {
    Mark::O
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            tier: default_tier(),
            computer_mark: default_computer_mark(),
            delays: ThinkingDelays::default(),
        }
    }
}

impl Settings {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %settings.mode, tier = %settings.tier, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        tier: Option<Tier>,
        computer_mark: Option<Mark>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(tier) = tier {
            self.tier = tier;
        }
        if let Some(mark) = computer_mark {
            self.computer_mark = mark;
        }
        self
    }

    /// Replaces the thinking delays.
    pub fn with_delays(mut self, delays: ThinkingDelays) -> Self {
        self.delays = delays;
        self
    }
}

/// Per-tier pause before the computer moves, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ThinkingDelays {
    /// Pause for the weak tier.
    #[serde(default = "default_weak_ms")]
    weak_ms: u64,
    /// Pause for the balanced tier.
    #[serde(default = "default_balanced_ms")]
    balanced_ms: u64,
    /// Pause for the optimal tier.
    #[serde(default = "default_optimal_ms")]
    optimal_ms: u64,
}

fn default_weak_ms() -> u64 {
    300
}

fn default_balanced_ms() -> u64 {
    500
}

fn default_optimal_ms() -> u64 {
    800
}

impl Default for ThinkingDelays {
    fn default() -> Self {
        Self {
            weak_ms: default_weak_ms(),
            balanced_ms: default_balanced_ms(),
            optimal_ms: default_optimal_ms(),
        }
    }
}

impl ThinkingDelays {
    /// No pause at any tier (benchmarks and tests).
    pub fn none() -> Self {
        Self {
            weak_ms: 0,
            balanced_ms: 0,
            optimal_ms: 0,
        }
    }

    /// Pause for the given tier.
    pub fn for_tier(&self, tier: Tier) -> Duration {
        let ms = match tier {
            Tier::Weak => self.weak_ms,
            Tier::Balanced => self.balanced_ms,
            Tier::Optimal => self.optimal_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
