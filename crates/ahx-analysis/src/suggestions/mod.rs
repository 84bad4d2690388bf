//! Remediation suggestions derived from a file's signals.

use ahx_core::config::SuggestionConfig;
use ahx_core::{FileReport, Suggestion, SuggestionKind};

/// Fixed-order rule table over `SuggestionKind::ALL`. Rules tied to client
/// components only fire when the report is marked as one.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine {
    effect_statements_min: f64,
    event_handlers_min: f64,
    context_sites_min: f64,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self::from_config(&SuggestionConfig::default())
    }

    pub fn from_config(config: &SuggestionConfig) -> Self {
        Self {
            effect_statements_min: config.effective_effect_statements_min(),
            event_handlers_min: config.effective_event_handlers_min(),
            context_sites_min: config.effective_context_sites_min(),
        }
    }

    /// Minimum source-signal score for `kind` to fire.
    pub fn threshold(&self, kind: SuggestionKind) -> f64 {
        match kind {
            SuggestionKind::DeferEffects => self.effect_statements_min,
            SuggestionKind::ReduceEventHandlers => self.event_handlers_min,
            SuggestionKind::MoveContextDown => self.context_sites_min,
            SuggestionKind::IsolateClientOnlyLogic
            | SuggestionKind::MemoizeLargeProps
            | SuggestionKind::SplitBundle
            | SuggestionKind::CodeSplitCharts => 1.0,
        }
    }

    pub fn suggest(&self, report: &FileReport) -> Vec<Suggestion> {
        SuggestionKind::ALL
            .iter()
            .filter(|kind| !kind.requires_client() || report.is_client_component)
            .filter_map(|&kind| {
                let signal = report.signal(kind.source_signal())?;
                (signal.score >= self.threshold(kind))
                    .then(|| Suggestion::new(kind, signal.detail.clone()))
            })
            .collect()
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
