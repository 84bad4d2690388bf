//! File path to route mapping.

use std::path::Path;

use crate::routes::RoutesMap;

const SOURCE_SUFFIXES: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Route for a source file, relative to `root`.
///
/// `pages/blog/post.tsx` becomes `/blog/post`, `pages/index.tsx` becomes
/// `/`, and files outside `pages/` keep their directory, e.g.
/// `src/App.tsx` becomes `/src/App`. A trailing `index` segment is
/// dropped, leaving its trailing slash.
pub fn route_for_file(file: &Path, root: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let stem = SOURCE_SUFFIXES
        .iter()
        .find_map(|suffix| joined.strip_suffix(suffix))
        .unwrap_or(joined.as_str());

    let mut route = match stem.strip_prefix("pages/") {
        Some(rest) => format!("/{rest}"),
        None => stem.to_string(),
    };
    if route == "index" || route.ends_with("/index") {
        route.truncate(route.len() - "index".len());
    }
    if !route.starts_with('/') {
        route.insert(0, '/');
    }
    route
}

/// Group files by route. Each route lists its files in input order.
pub fn build_routes_map<'p>(files: impl IntoIterator<Item = &'p Path>, root: &Path) -> RoutesMap {
    let mut map = RoutesMap::new();
    for file in files {
        map.entry(route_for_file(file, root))
            .or_default()
            .push(file.display().to_string());
    }
    map
}
