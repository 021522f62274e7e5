//! Redirect configuration loaded from `redirect.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "redirect.json";

const SESSION_FILE_NAME: &str = "resistance-guide-session.json";

/// Upper bound for `TickMillis` and `BackupDelayMillis` (one hour)
pub const MAX_DELAY_MILLIS: u64 = 60 * 60 * 1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectConfig {
    #[serde(rename = "CountdownSeconds", default = "default_countdown_seconds", deserialize_with = "validate_positive_u32")]
    pub countdown_seconds: u32,
    #[serde(rename = "TickMillis", default = "default_tick_millis", deserialize_with = "validate_positive_u64")]
    pub tick_millis: u64,
    #[serde(rename = "BackupDelayMillis", default = "default_backup_delay_millis", deserialize_with = "validate_positive_u64")]
    pub backup_delay_millis: u64,
    #[serde(rename = "SessionFile", default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

fn default_countdown_seconds() -> u32 {
    5
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_backup_delay_millis() -> u64 {
    5000
}

fn validate_positive_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    if value > 0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("Value must be positive"))
    }
}

fn validate_positive_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = u64::deserialize(deserializer)?;
    if value > 0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("Value must be positive"))
    }
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: default_countdown_seconds(),
            tick_millis: default_tick_millis(),
            backup_delay_millis: default_backup_delay_millis(),
            session_file: None,
        }
    }
}

impl RedirectConfig {
    /// Load the configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: RedirectConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// The backup deadline may precede the end of the countdown by at most one tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("TickMillis", self.tick_millis),
            ("BackupDelayMillis", self.backup_delay_millis),
        ] {
            if value > MAX_DELAY_MILLIS {
                return Err(ConfigError::Invalid(format!(
                    "{} ({}) exceeds the maximum of {} ms",
                    name, value, MAX_DELAY_MILLIS
                )));
            }
        }

        let countdown_span = self
            .tick_millis
            .checked_mul(u64::from(self.countdown_seconds))
            .ok_or_else(|| ConfigError::Invalid("countdown span overflows".to_string()))?;
        if self.backup_delay_millis + self.tick_millis < countdown_span {
            return Err(ConfigError::Invalid(format!(
                "BackupDelayMillis ({}) is more than one tick shorter than the countdown ({} ms)",
                self.backup_delay_millis, countdown_span
            )));
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn backup_delay(&self) -> Duration {
        Duration::from_millis(self.backup_delay_millis)
    }

    /// Session store location for the terminal front-end
    pub fn session_path(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(SESSION_FILE_NAME))
    }
}
