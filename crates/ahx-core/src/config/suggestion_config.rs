//! Suggestion rule thresholds.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONTEXT_SITES_MIN, DEFAULT_EFFECT_STATEMENTS_MIN, DEFAULT_EVENT_HANDLERS_MIN,
};

/// Thresholds for the rules that are not simple presence checks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Effect statements before `deferEffects`. Default: 5.
    pub effect_statements_min: Option<f64>,
    /// Event handler props before `reduceEventHandlers`. Default: 5.
    pub event_handlers_min: Option<f64>,
    /// Context call sites/providers before `moveContextDown`. Default: 2.
    pub context_sites_min: Option<f64>,
}

impl SuggestionConfig {
    pub fn effective_effect_statements_min(&self) -> f64 {
        self.effect_statements_min.unwrap_or(DEFAULT_EFFECT_STATEMENTS_MIN)
    }

    pub fn effective_event_handlers_min(&self) -> f64 {
        self.event_handlers_min.unwrap_or(DEFAULT_EVENT_HANDLERS_MIN)
    }

    pub fn effective_context_sites_min(&self) -> f64 {
        self.context_sites_min.unwrap_or(DEFAULT_CONTEXT_SITES_MIN)
    }
}
