//! Source file discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahx_core::config::ScanConfig;
use ahx_core::errors::{PipelineResult, ScanError};
use ignore::WalkBuilder;
use rayon::prelude::*;

use super::ignores::IgnorePatterns;
use crate::pipeline::SourceInput;

/// Walk each configured source directory under `root` and return matching
/// files, sorted and deduplicated. Missing source directories are skipped;
/// unreadable entries become non-fatal errors.
pub fn discover_sources(
    root: &Path,
    config: &ScanConfig,
) -> Result<PipelineResult<Vec<PathBuf>>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let extensions = config.effective_extensions();
    let max_file_size = config.effective_max_file_size();
    let patterns = Arc::new(IgnorePatterns::new(root));

    let mut result = PipelineResult::<Vec<PathBuf>>::default();
    let mut found = BTreeSet::new();
    let mut oversized = 0usize;

    for source_dir in config.effective_source_dirs() {
        let dir = root.join(&source_dir);
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "source directory absent, skipping");
            continue;
        }

        let filter = Arc::clone(&patterns);
        let walker = WalkBuilder::new(&dir)
            .follow_links(config.effective_follow_symlinks())
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !filter.is_ignored(entry.path(), is_dir)
            })
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    result.add_error(
                        ScanError::Walk {
                            path: dir.clone(),
                            message: e.to_string(),
                        }
                        .into(),
                    );
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let path = entry.path();
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| extensions.iter().any(|x| x == e));
            if !matches_ext {
                continue;
            }
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            if size > max_file_size {
                oversized += 1;
                continue;
            }
            found.insert(path.to_path_buf());
        }
    }

    tracing::info!(
        root = %root.display(),
        files = found.len(),
        oversized,
        errors = result.error_count(),
        "discovered sources"
    );
    result.data = found.into_iter().collect();
    Ok(result)
}

/// Read every path as UTF-8 text, in parallel. Unreadable files are
/// reported and skipped; order is preserved.
pub fn read_sources(paths: &[PathBuf]) -> PipelineResult<Vec<SourceInput>> {
    let reads: Vec<Result<SourceInput, ScanError>> = paths
        .par_iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(|source| SourceInput::new(path.clone(), source))
                .map_err(|source| ScanError::Read {
                    path: path.clone(),
                    source,
                })
        })
        .collect();

    let mut result = PipelineResult::<Vec<SourceInput>>::default();
    for read in reads {
        match read {
            Ok(input) => result.data.push(input),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable source");
                result.add_error(e.into());
            }
        }
    }
    result
}
