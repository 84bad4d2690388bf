//! Batch-level errors and the partial-success result type.

use super::{ArtifactError, ConfigError, ParseError, ScanError};

/// Any failure a batch run can hit. Each subsystem error converts in.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("scan: {0}")]
    Scan(#[from] ScanError),

    #[error("parse: {0}")]
    Parse(#[from] ParseError),

    #[error("artifact: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

/// Output of a batch run plus the per-file failures it skipped over.
/// A file that fails never aborts the batch.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    pub data: T,
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: PipelineError) {
        self.errors.push(error);
    }

    /// Transform the data, keeping the collected errors.
    pub fn map<U: Default>(self, f: impl FnOnce(T) -> U) -> PipelineResult<U> {
        PipelineResult {
            data: f(self.data),
            errors: self.errors,
        }
    }

    /// No file was skipped.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
