//! Hotspot scoring: per-file risk in [0, 20], optionally blended with
//! runtime route metrics.

pub mod hotspot;
pub mod weights;

pub use hotspot::{round_one_decimal, runtime_contribution, signal_contribution, HotspotScorer};
pub use weights::SignalWeights;
