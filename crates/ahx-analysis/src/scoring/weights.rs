//! Per-signal weights.

use ahx_core::config::ScoringConfig;
use ahx_core::errors::ConfigError;
use ahx_core::Signal;

/// Weight table indexed by signal, seeded from `Signal::default_weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWeights {
    weights: [f64; 7],
}

impl SignalWeights {
    pub fn get(&self, signal: Signal) -> f64 {
        self.weights[signal as usize]
    }

    pub fn set(&mut self, signal: Signal, weight: f64) {
        self.weights[signal as usize] = weight;
    }

    /// Defaults with `[scoring.weights]` applied.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, ConfigError> {
        let mut weights = Self::default();
        for (signal, weight) in config.weight_overrides()? {
            weights.set(signal, weight);
        }
        Ok(weights)
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            weights: Signal::ALL.map(|s| s.default_weight()),
        }
    }
}
