//! The hotspot scorer.

use ahx_core::config::ScoringConfig;
use ahx_core::constants::{
    CLS_CAP, CLS_UNIT, JS_BYTES_CAP, JS_BYTES_UNIT, LCP_CAP, LCP_UNIT_MS, MAGNITUDE_CAP,
    MAX_HOTSPOT_SCORE, NORMALIZED_POINTS, TBT_CAP, TBT_UNIT_MS,
};
use ahx_core::errors::ConfigError;
use ahx_core::{FileReport, RouteMetrics, SignalScore};

use super::weights::SignalWeights;

/// Combines a file's signals (and optionally its route's runtime metrics)
/// into one score in [0, 20], rounded to one decimal.
#[derive(Debug, Clone, Default)]
pub struct HotspotScorer {
    weights: SignalWeights,
}

impl HotspotScorer {
    pub fn new(weights: SignalWeights) -> Self {
        Self { weights }
    }

    pub fn from_config(config: &ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(SignalWeights::from_config(config)?))
    }

    pub fn weights(&self) -> &SignalWeights {
        &self.weights
    }

    pub fn score(&self, report: &FileReport, metrics: Option<&RouteMetrics>) -> f64 {
        let static_part: f64 = report
            .signals
            .iter()
            .map(|(signal, value)| signal_contribution(self.weights.get(*signal), value))
            .sum();
        let total = static_part + metrics.map_or(0.0, runtime_contribution);
        if total.is_nan() {
            return 0.0;
        }
        round_one_decimal(total.clamp(0.0, MAX_HOTSPOT_SCORE))
    }
}

/// `weight * (normalized * 7 + min(3, log10(score + 1)))`.
pub fn signal_contribution(weight: f64, value: &SignalScore) -> f64 {
    let magnitude = (value.score.max(0.0) + 1.0).log10().min(MAGNITUDE_CAP);
    weight * (value.normalized() * NORMALIZED_POINTS + magnitude)
}

/// Points from runtime metrics; each present metric is capped separately.
pub fn runtime_contribution(metrics: &RouteMetrics) -> f64 {
    let lcp = metrics.lcp.map_or(0.0, |v| bounded(v / LCP_UNIT_MS, LCP_CAP));
    let tbt = metrics.tbt.map_or(0.0, |v| bounded(v / TBT_UNIT_MS, TBT_CAP));
    let cls = metrics.cls.map_or(0.0, |v| bounded(v / CLS_UNIT, CLS_CAP));
    let js = metrics
        .js_bytes
        .map_or(0.0, |v| bounded(v as f64 / JS_BYTES_UNIT, JS_BYTES_CAP));
    lcp + tbt + cls + js
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn bounded(points: f64, cap: f64) -> f64 {
    points.max(0.0).min(cap)
}
