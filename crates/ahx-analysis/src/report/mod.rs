//! Persisted artifacts: scan output, merged report, markdown rendering.

pub mod artifact;
pub mod io;
pub mod markdown;

pub use artifact::{MergedReport, RuntimeRouteReport, ScanArtifact, ScannedFile};
pub use io::{read_json, write_json, ArtifactPaths};
pub use markdown::render_markdown;
