//! Configuration for splitlog loggers
//!
//! The core only ever sees a [`LoggerConfig`]. The `LOG_LEVEL` environment
//! variable and TOML files are two optional sources that produce one.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LoggerError, LoggerResult};
use crate::logging::Level;

/// Environment variable consulted by [`LoggerConfig::from_env`]
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Logger configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Records below this level are discarded (default: info)
    #[serde(default, deserialize_with = "deserialize_level_lenient")]
    pub min_level: Level,
}

fn deserialize_level_lenient<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(level_or_default(Some(&raw)))
}

/// Parse a level name, falling back to Info when absent or unrecognized
pub fn level_or_default(value: Option<&str>) -> Level {
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}

impl LoggerConfig {
    /// Create a config with the given minimum level
    pub fn new(min_level: Level) -> Self {
        Self { min_level }
    }

    /// Set the minimum level
    #[must_use]
    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    /// Build a config from the `LOG_LEVEL` environment variable
    pub fn from_env() -> Self {
        let value = std::env::var(LEVEL_ENV_VAR).ok();
        Self::from_env_value(value.as_deref())
    }

    /// Build a config from a raw `LOG_LEVEL` value
    ///
    /// Matching is case-insensitive; anything unrecognized yields Info.
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self::new(level_or_default(value))
    }

    /// Parse a config from a TOML document
    pub fn from_toml_str(content: &str) -> LoggerResult<Self> {
        toml::from_str(content).map_err(|e| LoggerError::Config(e.to_string()))
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> LoggerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
