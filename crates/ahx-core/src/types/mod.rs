//! Data model shared by the analyzer, scorer, suggestion engine and reports.

pub mod metrics;
pub mod report;
pub mod signal;
pub mod suggestion;

pub use metrics::RouteMetrics;
pub use report::{FileReport, RouteReport};
pub use signal::{Signal, SignalScore};
pub use suggestion::{Suggestion, SuggestionKind};
