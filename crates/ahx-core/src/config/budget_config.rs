//! Runtime budgets checked in CI.

use serde::{Deserialize, Serialize};

/// Per-route runtime budgets. An unset budget is unlimited.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BudgetConfig {
    /// Maximum script bytes per route.
    pub js_bytes: Option<u64>,
    /// Maximum total blocking time per route, ms.
    pub tbt: Option<f64>,
}

impl BudgetConfig {
    pub fn is_unlimited(&self) -> bool {
        self.js_bytes.is_none() && self.tbt.is_none()
    }
}
