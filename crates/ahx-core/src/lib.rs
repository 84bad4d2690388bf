//! ahx-core: shared foundation for the ahx hydration risk engine.
//!
//! - Types: signals, file/route reports, runtime metrics, suggestions
//! - Errors: one `thiserror` enum per subsystem
//! - Config: TOML, layered resolution (CLI > env > project > user > defaults)
//! - Tracing: `tracing-subscriber` setup driven by `AHX_LOG`
//! - Constants: fixed tables and thresholds shared by every consumer

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use types::{
    FileReport, RouteMetrics, RouteReport, Signal, SignalScore, Suggestion, SuggestionKind,
};
