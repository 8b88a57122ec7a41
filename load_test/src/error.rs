//! Error types for scenario configuration.
//!
//! Request failures never surface here; goose records those in its own
//! metrics. These errors cover selecting and loading profiles.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown scenario '{name}' (available: {available})")]
    UnknownScenario { name: String, available: String },

    #[error("invalid duration '{input}': {reason}")]
    InvalidDuration { input: String, reason: &'static str },

    #[error("failed to read scenario file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scenario '{name}' uses ramping-vus but declares no stages")]
    EmptyStages { name: String },

    #[error("scenario '{name}' uses constant-vus with a zero duration")]
    ZeroDuration { name: String },
}

impl ConfigError {
    pub fn invalid_duration(input: &str, reason: &'static str) -> Self {
        Self::InvalidDuration {
            input: input.to_string(),
            reason,
        }
    }
}
