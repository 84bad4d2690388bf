//! eagerCharts: static imports of charting libraries.

use ahx_core::constants::CHART_PACKAGES;
use ahx_core::{Signal, SignalScore};

use super::bundle::is_local;
use super::SignalExtractor;
use crate::parsers::{ParsedFile, SyntaxIndex};

/// Counts package imports (relative and absolute paths excluded) that name
/// a known charting library.
pub struct EagerChartsExtractor {
    packages: Vec<String>,
}

impl EagerChartsExtractor {
    pub fn new() -> Self {
        Self::with_extra(&[])
    }

    /// Built-in chart packages plus `extra`.
    pub fn with_extra(extra: &[String]) -> Self {
        let packages = CHART_PACKAGES
            .iter()
            .map(|p| p.to_string())
            .chain(extra.iter().cloned())
            .collect();
        Self { packages }
    }

    /// Exact match, or substring match against the package name with the
    /// scope `@` removed. One import counts once however many names match.
    pub fn is_chart_import(&self, spec: &str) -> bool {
        self.packages
            .iter()
            .any(|p| spec == p || spec.contains(p.replacen('@', "", 1).as_str()))
    }
}

impl Default for EagerChartsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalExtractor for EagerChartsExtractor {
    fn signal(&self) -> Signal {
        Signal::EagerCharts
    }

    fn extract(&self, _file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore> {
        let detail: Vec<String> = syntax
            .imports
            .iter()
            .filter(|i| !is_local(i.specifier) && self.is_chart_import(i.specifier))
            .map(|i| i.specifier.to_string())
            .collect();
        if detail.is_empty() {
            return None;
        }
        Some(SignalScore::saturated(detail.len() as f64, detail))
    }
}
