//! Parser errors.

use std::path::PathBuf;

/// Errors that can occur while turning source text into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load grammar for {path}: {message}")]
    GrammarLoad { path: PathBuf, message: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitterError { path: PathBuf, message: String },

    #[error("Partial parse of {path}: {error_count} syntax error(s)")]
    PartialParse { path: PathBuf, error_count: usize },
}

impl ParseError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::GrammarLoad { path, .. }
            | Self::TreeSitterError { path, .. }
            | Self::PartialParse { path, .. } => path,
        }
    }
}
