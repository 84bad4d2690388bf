//! Error handling for ahx.
//! One error enum per subsystem, `thiserror` only.

pub mod artifact_error;
pub mod config_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod scan_error;

pub use artifact_error::ArtifactError;
pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use scan_error::ScanError;
