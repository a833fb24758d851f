//! Unit tests for configuration persistence.

use skiergcalc::metrics::start_group::ExperienceTier;
use skiergcalc::storage::config::{load_config_from, save_config_to, AppConfig, ConfigError};
use tempfile::tempdir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    let mut config = AppConfig::default();
    config.athlete.set_weight(68.5).unwrap();
    config.athlete.tier = ExperienceTier::Stor;
    config.display.decimals = 2;

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded.athlete.weight_kg, Some(68.5));
    assert_eq!(loaded.athlete.tier, ExperienceTier::Stor);
    assert_eq!(loaded.display.decimals, 2);
}

#[test]
fn test_tier_stored_lowercase() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.athlete.tier = ExperienceTier::Liten;
    save_config_to(&config, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("tier = \"liten\""));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[athlete\nweight_kg = ").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_unknown_tier_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[athlete]\ntier = \"expert\"\n").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}
