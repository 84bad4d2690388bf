//! Per-file and per-route reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::metrics::RouteMetrics;
use super::signal::{Signal, SignalScore};

/// Static analysis result for one source file. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    /// Components in declaration order, without duplicates.
    #[serde(default)]
    pub component_names: Vec<String>,
    /// Detected signals. Absent keys mean "not detected".
    #[serde(default)]
    pub signals: BTreeMap<Signal, SignalScore>,
    /// Set by the directive classifier; absent in older artifacts.
    #[serde(default)]
    pub is_client_component: bool,
}

impl FileReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }

    pub fn signal(&self, signal: Signal) -> Option<&SignalScore> {
        self.signals.get(&signal)
    }

    /// Accumulated score for `signal`, 0 when absent.
    pub fn signal_score(&self, signal: Signal) -> f64 {
        self.signal(signal).map_or(0.0, |s| s.score)
    }

    pub fn has_signals(&self) -> bool {
        !self.signals.is_empty()
    }
}

/// Aggregated risk for one route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteReport {
    pub route: String,
    /// Worst member file score, 0 to 20.
    pub score: f64,
    #[serde(default)]
    pub metrics: RouteMetrics,
}
