//! Signal kinds and their scores.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of static hydration-risk signals.
///
/// Declaration order is the canonical order: reports store signals in a
/// `BTreeMap<Signal, _>`, so serialized reports list them in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "effectHeaviness")]
    EffectHeaviness,
    #[serde(rename = "clientOnlyAPIs")]
    ClientOnlyApis,
    #[serde(rename = "bundleFootprint")]
    BundleFootprint,
    #[serde(rename = "eventDensity")]
    EventDensity,
    #[serde(rename = "eagerCharts")]
    EagerCharts,
    #[serde(rename = "largeLiteralProps")]
    LargeLiteralProps,
    #[serde(rename = "contextAtRoot")]
    ContextAtRoot,
}

impl Signal {
    pub const ALL: [Signal; 7] = [
        Self::EffectHeaviness,
        Self::ClientOnlyApis,
        Self::BundleFootprint,
        Self::EventDensity,
        Self::EagerCharts,
        Self::LargeLiteralProps,
        Self::ContextAtRoot,
    ];

    /// Wire name, identical to the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EffectHeaviness => "effectHeaviness",
            Self::ClientOnlyApis => "clientOnlyAPIs",
            Self::BundleFootprint => "bundleFootprint",
            Self::EventDensity => "eventDensity",
            Self::EagerCharts => "eagerCharts",
            Self::LargeLiteralProps => "largeLiteralProps",
            Self::ContextAtRoot => "contextAtRoot",
        }
    }

    pub fn from_name(name: &str) -> Option<Signal> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Hotspot weight of this signal.
    pub fn default_weight(&self) -> f64 {
        match self {
            Self::EffectHeaviness => 1.0,
            Self::ClientOnlyApis => 1.0,
            Self::BundleFootprint => 1.2,
            Self::EventDensity => 0.8,
            Self::EagerCharts => 1.4,
            Self::LargeLiteralProps => 1.0,
            Self::ContextAtRoot => 0.6,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulated evidence for one signal in one file.
///
/// `score <= max` is not enforced. Every extractor sets `max` to its own
/// final accumulator (bundle footprint uses `max(bytes, imports)`), so the
/// normalized value is 1.0 whenever `score > 0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignalScore {
    pub score: f64,
    pub max: f64,
    /// One human-readable line per occurrence, in source order.
    #[serde(default)]
    pub detail: Vec<String>,
}

impl SignalScore {
    pub fn new(score: f64, max: f64, detail: Vec<String>) -> Self {
        Self { score, max, detail }
    }

    /// Score whose ceiling mirrors the accumulated value.
    pub fn saturated(score: f64, detail: Vec<String>) -> Self {
        Self { score, max: score, detail }
    }

    /// `score / max`, or 0 when `max` is not positive.
    // FIXME: every extractor sets max to its own accumulator, so this is 1.0
    // for any non-zero score. A per-signal ceiling was probably intended.
    pub fn normalized(&self) -> f64 {
        if self.max > 0.0 {
            (self.score / self.max).min(1.0)
        } else {
            0.0
        }
    }
}
