//! Signal extraction configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARRAY_ELEMENTS_THRESHOLD, DEFAULT_LITERAL_TEXT_THRESHOLD,
    DEFAULT_OBJECT_PROPS_THRESHOLD,
};
use crate::errors::ConfigError;
use crate::types::Signal;

/// Configuration for the static analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Signals that are never extracted, by wire name (e.g. `eventDensity`).
    pub disabled_signals: Vec<String>,
    /// Chart packages recognised in addition to the built-in list.
    pub extra_chart_packages: Vec<String>,
    /// Treat files with syntax errors as parse failures. Default: false.
    pub reject_syntax_errors: Option<bool>,
    /// Object literal props with more properties are large. Default: 5.
    pub object_props_threshold: Option<usize>,
    /// Array literal props with more elements are large. Default: 10.
    pub array_elements_threshold: Option<usize>,
    /// Literal props with longer source text are large. Default: 200.
    pub literal_text_threshold: Option<usize>,
}

impl AnalysisConfig {
    pub fn effective_reject_syntax_errors(&self) -> bool {
        self.reject_syntax_errors.unwrap_or(false)
    }

    pub fn effective_object_props_threshold(&self) -> usize {
        self.object_props_threshold.unwrap_or(DEFAULT_OBJECT_PROPS_THRESHOLD)
    }

    pub fn effective_array_elements_threshold(&self) -> usize {
        self.array_elements_threshold.unwrap_or(DEFAULT_ARRAY_ELEMENTS_THRESHOLD)
    }

    pub fn effective_literal_text_threshold(&self) -> usize {
        self.literal_text_threshold.unwrap_or(DEFAULT_LITERAL_TEXT_THRESHOLD)
    }

    /// Resolve `disabled_signals` into signal kinds.
    pub fn disabled(&self) -> Result<Vec<Signal>, ConfigError> {
        self.disabled_signals
            .iter()
            .map(|name| {
                Signal::from_name(name).ok_or_else(|| ConfigError::UnknownSignal {
                    field: "analysis.disabled_signals".to_string(),
                    name: name.clone(),
                })
            })
            .collect()
    }

    pub fn is_enabled(&self, signal: Signal) -> bool {
        !self.disabled_signals.iter().any(|name| name == signal.name())
    }
}
