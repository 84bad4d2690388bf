//! Default ignore patterns for front-end projects.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Directories never descended into.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".pnpm",
    ".yarn",
    "bower_components",
    ".git",
    ".next",
    ".nuxt",
    ".turbo",
    ".vercel",
    ".cache",
    ".parcel-cache",
    "dist",
    "build",
    "out",
    "coverage",
    "__snapshots__",
    ".ahx",
];

/// Generated or bundled files.
pub const DEFAULT_IGNORE_FILES: &[&str] = &["*.min.js", "*.map", "*.d.ts", "*.generated.*"];

pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    pub fn new(root: &Path) -> Self {
        let mut builder = GitignoreBuilder::new(root);
        let lines = DEFAULT_IGNORE_DIRS
            .iter()
            .map(|dir| format!("{dir}/"))
            .chain(DEFAULT_IGNORE_FILES.iter().map(|p| p.to_string()));
        for line in lines {
            if let Err(e) = builder.add_line(None, &line) {
                tracing::warn!(pattern = %line, error = %e, "ignore pattern rejected");
            }
        }
        let gitignore = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "default ignore patterns rejected");
            Gitignore::empty()
        });
        Self { gitignore }
    }

    /// Paths outside the matcher root are never ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        if !path.starts_with(self.gitignore.path()) {
            return false;
        }
        self.gitignore
            .matched_path_or_any_parents(path, is_dir)
            .is_ignore()
    }
}
