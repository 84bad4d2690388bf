//! ahx-analysis: the hydration risk engine.
//!
//! Source text is parsed with tree-sitter, indexed once, and handed to seven
//! signal extractors. The resulting `FileReport`s are scored, turned into
//! remediation suggestions, and aggregated per route.

pub mod analyzer;
pub mod budget;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod routes;
pub mod scanner;
pub mod scoring;
pub mod signals;
pub mod suggestions;

pub use analyzer::FileAnalyzer;
pub use pipeline::{ScanPipeline, SourceInput};
pub use routes::RouteAggregator;
pub use scoring::HotspotScorer;
pub use suggestions::SuggestionEngine;
