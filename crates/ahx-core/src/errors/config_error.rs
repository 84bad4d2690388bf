//! Configuration errors.

use std::path::PathBuf;

/// Errors raised loading or validating `ahx.toml` and its overrides.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("{field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// A signal wire name that is not one of the seven known signals.
    #[error("{field}: unknown signal '{name}'")]
    UnknownSignal { field: String, name: String },
}
