//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans sharing the terminal.
    #[default]
    #[strum(to_string = "two-player", serialize = "pvp")]
    TwoPlayer,
    /// Human against the computer opponent.
    #[strum(to_string = "vs-computer", serialize = "pvai")]
    VsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Player vs Player",
            GameMode::VsComputer => "Player vs Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("pvp".parse::<GameMode>().unwrap(), GameMode::TwoPlayer);
        assert_eq!("vs-computer".parse::<GameMode>().unwrap(), GameMode::VsComputer);
        assert_eq!("PVAI".parse::<GameMode>().unwrap(), GameMode::VsComputer);
        assert!("solo".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(GameMode::VsComputer.to_string(), "vs-computer");
    }
}
