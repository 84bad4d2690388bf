//! Source discovery configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_SOURCE_DIRS, DEFAULT_SOURCE_EXTENSIONS, DEFAULT_THREADS,
};

/// Configuration for discovering source files under a project root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directories (relative to the root) to search. Default: src, pages, app.
    pub source_dirs: Vec<String>,
    /// Extensions (without dot) to analyze. Default: js, ts, jsx, tsx.
    pub extensions: Vec<String>,
    /// Maximum file size in bytes. Default: 1MB.
    pub max_file_size: Option<u64>,
    /// Worker threads for analysis. 0 = auto. Default: 0.
    pub threads: Option<usize>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    pub fn effective_source_dirs(&self) -> Vec<String> {
        if self.source_dirs.is_empty() {
            DEFAULT_SOURCE_DIRS.iter().map(|d| d.to_string()).collect()
        } else {
            self.source_dirs.clone()
        }
    }

    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_SOURCE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect()
        }
    }

    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
