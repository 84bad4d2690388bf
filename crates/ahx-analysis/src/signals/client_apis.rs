//! clientOnlyAPIs: references to browser-only globals.

use ahx_core::constants::CLIENT_ONLY_GLOBALS;
use ahx_core::{Signal, SignalScore};

use super::SignalExtractor;
use crate::parsers::{ParsedFile, SyntaxIndex};

/// Counts every identifier token named `window`, `document` or `navigator`,
/// including property names such as `x.window`. No scope analysis.
pub struct ClientOnlyApisExtractor;

impl SignalExtractor for ClientOnlyApisExtractor {
    fn signal(&self) -> Signal {
        Signal::ClientOnlyApis
    }

    fn extract(&self, _file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore> {
        let detail: Vec<String> = syntax
            .identifiers
            .iter()
            .filter(|id| CLIENT_ONLY_GLOBALS.contains(&id.name))
            .map(|id| format!("{} at {}", id.name, id.line))
            .collect();
        if detail.is_empty() {
            return None;
        }
        Some(SignalScore::saturated(detail.len() as f64, detail))
    }
}
