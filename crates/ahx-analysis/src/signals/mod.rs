//! Signal extractors: one per static hydration-risk signal.

pub mod bundle;
pub mod charts;
pub mod client_apis;
pub mod context;
pub mod effects;
pub mod events;
pub mod literal_props;
pub mod registry;

pub use bundle::{resolve_local_import, BundleFootprintExtractor};
pub use charts::EagerChartsExtractor;
pub use client_apis::ClientOnlyApisExtractor;
pub use context::ContextAtRootExtractor;
pub use effects::EffectHeavinessExtractor;
pub use events::EventDensityExtractor;
pub use literal_props::LargeLiteralPropsExtractor;
pub use registry::ExtractorRegistry;

use ahx_core::{Signal, SignalScore};

use crate::parsers::{ParsedFile, SyntaxIndex};

/// A single signal extractor.
///
/// Extractors are stateless over their input and read only the shared
/// syntax index (plus the filesystem, for bundle sizes). Returning `None`
/// means the signal was not detected and is left out of the report.
pub trait SignalExtractor: Send + Sync {
    fn signal(&self) -> Signal;

    fn extract(&self, file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore>;
}
