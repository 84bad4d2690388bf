//! Remediation suggestions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::signal::Signal;

/// Fixed remediation vocabulary. Codemod dispatch keys off these names,
/// so the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionKind {
    DeferEffects,
    IsolateClientOnlyLogic,
    ReduceEventHandlers,
    MemoizeLargeProps,
    SplitBundle,
    CodeSplitCharts,
    MoveContextDown,
}

impl SuggestionKind {
    /// All kinds in rule-check order.
    pub const ALL: [SuggestionKind; 7] = [
        Self::DeferEffects,
        Self::IsolateClientOnlyLogic,
        Self::ReduceEventHandlers,
        Self::MemoizeLargeProps,
        Self::SplitBundle,
        Self::CodeSplitCharts,
        Self::MoveContextDown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::DeferEffects => "deferEffects",
            Self::IsolateClientOnlyLogic => "isolateClientOnlyLogic",
            Self::ReduceEventHandlers => "reduceEventHandlers",
            Self::MemoizeLargeProps => "memoizeLargeProps",
            Self::SplitBundle => "splitBundle",
            Self::CodeSplitCharts => "codeSplitCharts",
            Self::MoveContextDown => "moveContextDown",
        }
    }

    /// The signal whose detail lines a suggestion of this kind relates to.
    pub fn source_signal(&self) -> Signal {
        match self {
            Self::DeferEffects => Signal::EffectHeaviness,
            Self::IsolateClientOnlyLogic => Signal::ClientOnlyApis,
            Self::ReduceEventHandlers => Signal::EventDensity,
            Self::MemoizeLargeProps => Signal::LargeLiteralProps,
            Self::SplitBundle => Signal::BundleFootprint,
            Self::CodeSplitCharts => Signal::EagerCharts,
            Self::MoveContextDown => Signal::ContextAtRoot,
        }
    }

    /// Whether the rule only fires for client components.
    pub fn requires_client(&self) -> bool {
        !matches!(self, Self::SplitBundle | Self::MoveContextDown)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::DeferEffects => "Split heavy effects and defer non-critical work",
            Self::IsolateClientOnlyLogic => {
                "Guard window/document access and move to client-only boundaries"
            }
            Self::ReduceEventHandlers => "Consolidate or memoize dense event handlers",
            Self::MemoizeLargeProps => {
                "Memoize or extract large object/array literals passed as props"
            }
            Self::SplitBundle => "Consider dynamic import for heavy local modules on this route",
            Self::CodeSplitCharts => {
                "Load charting libs lazily or on server; avoid eager client import"
            }
            Self::MoveContextDown => "Narrow provider scope to reduce render propagation",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One piece of remediation advice for a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
    /// Detail lines of the signal that triggered this suggestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
}

impl Suggestion {
    pub fn new(kind: SuggestionKind, related: Vec<String>) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            related: Some(related),
        }
    }
}
