//! Source discovery errors.

use std::path::PathBuf;

/// Errors raised while discovering or reading source files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Project root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Walk error under {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
