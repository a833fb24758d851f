//! Storage module for configuration.

pub mod config;

pub use config::{AppConfig, AthleteProfile, ConfigError, DisplaySettings};
