//! Athlete profile and application configuration.
//!
//! Stored as TOML in the platform data directory so the command line front
//! end can remember the athlete's weight and experience tier between runs.

use crate::metrics::start_group::ExperienceTier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Athlete data used as defaults for start group classification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteProfile {
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Self-reported experience tier
    pub tier: ExperienceTier,
}

impl AthleteProfile {
    /// Update weight after validating it.
    pub fn set_weight(&mut self, weight_kg: f64) -> Result<(), &'static str> {
        if !Self::validate_weight(weight_kg) {
            return Err("Weight must be between 30 and 200 kg");
        }
        self.weight_kg = Some(weight_kg);
        Ok(())
    }

    /// Validate weight value (30-200 kg).
    pub fn validate_weight(weight: f64) -> bool {
        (30.0..=200.0).contains(&weight)
    }
}

/// Output-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimal places for formatted times
    pub decimals: u32,
    /// Print results as JSON
    pub json: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            decimals: 1,
            json: false,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Athlete profile
    pub athlete: AthleteProfile,
    /// Display settings
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            athlete: AthleteProfile::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "skiergcalc", "SkiErgCalc")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from `path`, falling back to defaults when it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Save configuration to `path`, creating parent directories as needed.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
