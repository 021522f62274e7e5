//! Error types for the language redirect.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error for the terminal front-end.
///
/// Inside a page visit nothing here is fatal: storage and timer failures are
/// recovered where they happen and the visit falls back to a manual choice.
#[derive(Error, Debug)]
pub enum RedirectError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
