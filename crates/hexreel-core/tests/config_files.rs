//! Config file loading

use std::io::Write;

use hexreel_core::{ConfigError, GameConfig, SpinController, TimingProfile};

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_json_file() {
    let file = write_temp(
        ".json",
        r#"{ "max_tries": 6, "timing": { "profile": "turbo", "max_shuffles": 10, "shuffle_interval_ms": 50 } }"#,
    );

    let config = GameConfig::load(file.path()).unwrap();
    assert_eq!(config.max_tries, 6);
    assert_eq!(config.timing.profile, TimingProfile::Turbo);
    assert_eq!(config.timing.max_shuffles, 10);
}

#[test]
fn test_load_yaml_file() {
    let file = write_temp(".yml", "maxTries: 12\ninitial_reels: [2, 2, 1, 0, 0]\n");

    let config = GameConfig::load(file.path()).unwrap();
    assert_eq!(config.max_tries, 12);
    assert_eq!(config.initial_reels, [2, 2, 1, 0, 0]);

    let controller = SpinController::new(config).unwrap();
    assert_eq!(controller.snapshot().reels, [2, 2, 1, 0, 0]);
    assert_eq!(controller.snapshot().remaining_tries, 12);
}

#[test]
fn test_unknown_extension_rejected() {
    let file = write_temp(".toml", "max_tries = 3");
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        GameConfig::load("/nonexistent/hexreel.json"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_invalid_values_in_file() {
    let file = write_temp(".yaml", "timing:\n  max_shuffles: 0\n");
    assert!(matches!(
        GameConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}
