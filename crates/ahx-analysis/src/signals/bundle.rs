//! bundleFootprint: import count and on-disk size of local imports.

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use ahx_core::constants::IMPORT_EXTENSIONS;
use ahx_core::{Signal, SignalScore};

use super::SignalExtractor;
use crate::parsers::{ParsedFile, SyntaxIndex};

/// Sums the byte size of resolvable local imports into the score. Package
/// imports only add detail lines. The ceiling is `max(bytes, local imports)`
/// so that unresolved imports still count. Absent without local imports.
pub struct BundleFootprintExtractor;

impl SignalExtractor for BundleFootprintExtractor {
    fn signal(&self) -> Signal {
        Signal::BundleFootprint
    }

    fn extract(&self, file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore> {
        let mut bytes: u64 = 0;
        let mut local_count: u64 = 0;
        let mut detail = Vec::with_capacity(syntax.imports.len());
        for import in &syntax.imports {
            let spec = import.specifier;
            if !is_local(spec) {
                detail.push(format!("pkg:{spec}"));
                continue;
            }
            local_count += 1;
            match resolve_local_import(file.path(), spec) {
                Some((resolved, size)) => {
                    bytes += size;
                    detail.push(format!("local:{spec} => {} ({size} bytes)", resolved.display()));
                }
                None => {
                    tracing::debug!(file = %file.path().display(), spec, "unresolved local import");
                    detail.push(format!("local:{spec} => missing (0 bytes)"));
                }
            }
        }

        if local_count == 0 {
            return None;
        }
        Some(SignalScore::new(
            bytes as f64,
            bytes.max(local_count) as f64,
            detail,
        ))
    }
}

pub(crate) fn is_local(spec: &str) -> bool {
    spec.starts_with('.') || spec.starts_with('/')
}

/// Resolve a relative or absolute specifier against the importing file.
///
/// Candidates, first regular file wins: the path itself, the path with each
/// of `.tsx .ts .jsx .js` appended, then `index` plus each extension inside
/// the path as a directory. Returns the resolved path and its size.
pub fn resolve_local_import(from_file: &Path, spec: &str) -> Option<(PathBuf, u64)> {
    let base = if spec.starts_with('/') {
        PathBuf::from(spec)
    } else {
        let dir = from_file.parent().unwrap_or_else(|| Path::new(""));
        normalize(&dir.join(spec))
    };

    let with_ext = IMPORT_EXTENSIONS.iter().map(|ext| append(&base, ext));
    let index = IMPORT_EXTENSIONS
        .iter()
        .map(|ext| base.join(format!("index{ext}")));

    std::iter::once(base.clone())
        .chain(with_ext)
        .chain(index)
        .find_map(|candidate| {
            let meta = fs::metadata(&candidate).ok().filter(|m| m.is_file())?;
            Some((candidate, meta.len()))
        })
}

fn append(base: &Path, ext: &str) -> PathBuf {
    let mut raw: OsString = base.as_os_str().to_owned();
    raw.push(ext);
    PathBuf::from(raw)
}

/// Lexically collapse `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("a/b/../c/./d")), PathBuf::from("a/c/d"));
        assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize(Path::new("/a/../b")), PathBuf::from("/b"));
    }

    #[test]
    fn test_resolution_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("App.tsx"), "").unwrap();
        fs::write(root.join("util.ts"), "x").unwrap();
        fs::write(root.join("util.js"), "xxxx").unwrap();
        fs::create_dir(root.join("widgets")).unwrap();
        fs::write(root.join("widgets/index.jsx"), "abc").unwrap();

        let from = root.join("App.tsx");
        let (path, size) = resolve_local_import(&from, "./util").unwrap();
        assert_eq!(path, root.join("util.ts"));
        assert_eq!(size, 1);

        let (path, size) = resolve_local_import(&from, "./widgets").unwrap();
        assert_eq!(path, root.join("widgets/index.jsx"));
        assert_eq!(size, 3);

        let (path, _) = resolve_local_import(&from, "./util.js").unwrap();
        assert_eq!(path, root.join("util.js"));

        assert!(resolve_local_import(&from, "./nope").is_none());
    }

    #[test]
    fn test_extract_mixes_packages_and_locals() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.ts"), "0123456789").unwrap();
        let path = root.join("a.tsx");
        let source = "import React from 'react';\nimport b from './b';\nimport c from './c';\n";
        fs::write(&path, source).unwrap();

        let file = ParsedFile::parse(source, &path).unwrap();
        let s = BundleFootprintExtractor.extract(&file, &file.syntax()).unwrap();
        assert_eq!(s.score, 10.0);
        assert_eq!(s.max, 10.0);
        assert_eq!(s.detail[0], "pkg:react");
        assert_eq!(
            s.detail[1],
            format!("local:./b => {} (10 bytes)", root.join("b.ts").display())
        );
        assert_eq!(s.detail[2], "local:./c => missing (0 bytes)");
    }

    #[test]
    fn test_package_only_imports_are_absent() {
        let file = ParsedFile::parse("import x from 'lodash';", Path::new("z.ts")).unwrap();
        assert!(BundleFootprintExtractor.extract(&file, &file.syntax()).is_none());
    }

    #[test]
    fn test_unresolved_imports_keep_count_ceiling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.tsx");
        let file = ParsedFile::parse("import a from './a1';\nimport b from './b1';", &path).unwrap();
        let s = BundleFootprintExtractor.extract(&file, &file.syntax()).unwrap();
        assert_eq!(s.score, 0.0);
        assert_eq!(s.max, 2.0);
        assert_eq!(s.normalized(), 0.0);
    }
}
