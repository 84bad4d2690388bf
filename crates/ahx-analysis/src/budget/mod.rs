//! Runtime budget checks for CI gating.

use std::fmt;

use ahx_core::config::BudgetConfig;

use crate::report::RuntimeRouteReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetKind {
    JsBytes,
    Tbt,
}

impl BudgetKind {
    pub fn name(&self) -> &'static str {
        match self {
            BudgetKind::JsBytes => "jsBytes",
            BudgetKind::Tbt => "tbt",
        }
    }
}

/// A route metric above its budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetViolation {
    pub route: String,
    pub kind: BudgetKind,
    pub actual: f64,
    pub budget: f64,
}

impl fmt::Display for BudgetViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} > {}",
            self.route,
            self.kind.name(),
            self.actual,
            self.budget
        )
    }
}

/// Violations in runtime order, jsBytes before tbt within a route. Absent
/// metrics count as 0; unset budgets never trigger.
pub fn check_budgets(runtime: &[RuntimeRouteReport], budgets: &BudgetConfig) -> Vec<BudgetViolation> {
    let mut violations = Vec::new();
    if budgets.is_unlimited() {
        return violations;
    }
    for entry in runtime {
        let checks = [
            (
                BudgetKind::JsBytes,
                entry.metrics.js_bytes.unwrap_or(0) as f64,
                budgets.js_bytes.map(|b| b as f64),
            ),
            (
                BudgetKind::Tbt,
                entry.metrics.tbt.unwrap_or(0.0),
                budgets.tbt,
            ),
        ];
        for (kind, actual, budget) in checks {
            if let Some(budget) = budget.filter(|b| actual > *b) {
                violations.push(BudgetViolation {
                    route: entry.route.clone(),
                    kind,
                    actual,
                    budget,
                });
            }
        }
    }
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "runtime budgets exceeded");
    }
    violations
}
