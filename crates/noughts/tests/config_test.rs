//! Tests for settings loading.

use noughts::{GameMode, Settings, ThinkingDelays};
use noughts_core::{Mark, Tier};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = settings_file(
        r#"
mode = "vs-computer"
tier = "hard"
computer_mark = "X"

[delays]
weak_ms = 0
balanced_ms = 10
optimal_ms = 20
"#,
    );

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.mode(), GameMode::VsComputer);
    assert_eq!(*settings.tier(), Tier::Optimal);
    assert_eq!(*settings.computer_mark(), Mark::X);
    assert_eq!(settings.delays().for_tier(Tier::Weak), Duration::ZERO);
    assert_eq!(settings.delays().for_tier(Tier::Optimal), Duration::from_millis(20));
}

#[test]
fn test_file_mode_uses_canonical_names() {
    // Aliases belong to the command line.
    let file = settings_file("mode = \"pvp\"\n");
    assert!(Settings::from_file(file.path()).is_err());
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = settings_file("[delays]\noptimal_ms = 5\n");
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.mode(), GameMode::TwoPlayer);
    assert_eq!(*settings.tier(), Tier::Balanced);
    assert_eq!(*settings.computer_mark(), Mark::O);
    assert_eq!(*settings.delays().weak_ms(), 300);
    assert_eq!(*settings.delays().balanced_ms(), 500);
    assert_eq!(*settings.delays().optimal_ms(), 5);
}

#[test]
fn test_unknown_tier_falls_back_to_weak() {
    let file = settings_file("tier = \"grandmaster\"\n");
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.tier(), Tier::Weak);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(*settings.delays(), ThinkingDelays::default());
}

#[test]
fn test_invalid_file_is_an_error() {
    let file = settings_file("mode = [1, 2");
    let err = Settings::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_overrides_replace_file_values() {
    let file = settings_file("mode = \"two-player\"\ntier = \"weak\"\n");
    let settings = Settings::from_file(file.path())
        .unwrap()
        .with_overrides(Some(GameMode::VsComputer), None, Some(Mark::X))
        .with_delays(ThinkingDelays::none());

    assert_eq!(*settings.mode(), GameMode::VsComputer);
    assert_eq!(*settings.tier(), Tier::Weak);
    assert_eq!(*settings.computer_mark(), Mark::X);
    assert_eq!(settings.delays().for_tier(Tier::Balanced), Duration::ZERO);
}
