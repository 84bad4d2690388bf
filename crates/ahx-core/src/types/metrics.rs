//! Runtime metrics observed for one route.

use serde::{Deserialize, Serialize};

/// Page-load metrics supplied by the runtime collector.
///
/// Every field is optional; absent means "not measured" and contributes
/// nothing to a hotspot score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetrics {
    /// Largest contentful paint, ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lcp: Option<f64>,
    /// Total blocking time, ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tbt: Option<f64>,
    /// Cumulative layout shift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cls: Option<f64>,
    /// Script bytes transferred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hydration_marks: Vec<String>,
}

impl RouteMetrics {
    /// True when nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.lcp.is_none()
            && self.tbt.is_none()
            && self.cls.is_none()
            && self.js_bytes.is_none()
            && self.hydration_marks.is_empty()
    }
}
