//! Configuration loading from TOML and JSON files

mod constants;
mod scenario;

pub use constants::BattleConstants;
pub use scenario::{default_scenario, ScenarioConfig, TeamConfig, UnitConfig, WeaponConfig};

use crate::unit::ModelError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(#[from] ModelError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}
