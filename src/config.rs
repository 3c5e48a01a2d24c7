//! Configuration loaded from `<config_dir>/novacalc/config.toml`.

use crate::error::{Error, Result};
use crate::history::{DEFAULT_CAPACITY, DEFAULT_TIME_FORMAT, is_valid_time_format};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of records kept before the oldest is evicted.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for the time shown next to each history record.
    pub time_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("novacalc").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing default file yields the defaults; an explicitly given path
    /// must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicit && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|err| match err {
            ParseFailure::Toml(source) => Error::ConfigParse { path: path.clone(), source },
            ParseFailure::Invalid(msg) => Error::InvalidConfig(msg),
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn parse(contents: &str) -> std::result::Result<Self, ParseFailure> {
        let config: Self = toml::from_str(contents).map_err(ParseFailure::Toml)?;
        config.validate().map_err(ParseFailure::Invalid)?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.history.capacity == 0 {
            return Err("history.capacity must be at least 1".to_string());
        }
        if self.display.time_format.is_empty() {
            return Err("display.time_format must not be empty".to_string());
        }
        if !is_valid_time_format(&self.display.time_format) {
            return Err(format!(
                "display.time_format `{}` is not a valid strftime pattern",
                self.display.time_format
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(String),
}
