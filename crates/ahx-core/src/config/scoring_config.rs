//! Hotspot scoring configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::Signal;

/// Configuration for the hotspot scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Per-signal weight overrides keyed by wire name. Signals not listed
    /// keep their built-in weight.
    pub weights: HashMap<String, f64>,
}

impl ScoringConfig {
    /// Resolve overrides into typed pairs, rejecting unknown signals and
    /// weights that are negative or not finite.
    pub fn weight_overrides(&self) -> Result<Vec<(Signal, f64)>, ConfigError> {
        let mut overrides = Vec::with_capacity(self.weights.len());
        for (name, &weight) in &self.weights {
            let signal = Signal::from_name(name).ok_or_else(|| ConfigError::UnknownSignal {
                field: format!("scoring.weights.{name}"),
                name: name.clone(),
            })?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: format!("scoring.weights.{name}"),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
            overrides.push((signal, weight));
        }
        overrides.sort_by_key(|(signal, _)| *signal);
        Ok(overrides)
    }
}
