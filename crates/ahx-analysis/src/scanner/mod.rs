//! Source discovery, route mapping, and content hashing.

pub mod discovery;
pub mod hasher;
pub mod ignores;
pub mod routes_map;

pub use discovery::{discover_sources, read_sources};
pub use hasher::hash_content;
pub use ignores::IgnorePatterns;
pub use routes_map::{build_routes_map, route_for_file};
