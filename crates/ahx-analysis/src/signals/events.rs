//! eventDensity: JSX event-handler attributes.

use ahx_core::{Signal, SignalScore};

use super::SignalExtractor;
use crate::parsers::{ParsedFile, SyntaxIndex};

/// Counts attributes named `on` followed by an uppercase ASCII letter.
pub struct EventDensityExtractor;

pub(crate) fn is_event_handler(name: &str) -> bool {
    name.len() > 2 && name.starts_with("on") && name.as_bytes()[2].is_ascii_uppercase()
}

impl SignalExtractor for EventDensityExtractor {
    fn signal(&self) -> Signal {
        Signal::EventDensity
    }

    fn extract(&self, _file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore> {
        let detail: Vec<String> = syntax
            .attributes
            .iter()
            .filter(|a| is_event_handler(a.name))
            .map(|a| format!("{} at {}", a.name, a.line))
            .collect();
        if detail.is_empty() {
            return None;
        }
        Some(SignalScore::saturated(detail.len() as f64, detail))
    }
}
