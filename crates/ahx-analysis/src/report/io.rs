//! JSON artifact persistence.

use std::fs;
use std::path::{Path, PathBuf};

use ahx_core::constants::ARTIFACT_DIR;
use ahx_core::errors::ArtifactError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Well-known artifact locations under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub dir: PathBuf,
    pub scan: PathBuf,
    pub report: PathBuf,
    pub markdown: PathBuf,
}

impl ArtifactPaths {
    pub fn under(root: &Path) -> Self {
        let dir = root.join(ARTIFACT_DIR);
        Self {
            scan: dir.join("scan.json"),
            report: dir.join("report.json"),
            markdown: dir.join("report.md"),
            dir,
        }
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| ArtifactError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_text(path, &json)
}

pub fn write_text(path: &Path, contents: &str) -> Result<(), ArtifactError> {
    let io_err = |source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
