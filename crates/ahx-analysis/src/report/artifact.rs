//! Artifact models. JSON field names are camelCase.

use ahx_core::constants::VERSION;
use ahx_core::{FileReport, RouteMetrics, RouteReport, Suggestion};
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::routes::{RouteAggregator, RoutesMap};
use crate::scoring::HotspotScorer;

/// A `FileReport` with its static score and suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedFile {
    #[serde(flatten)]
    pub report: FileReport,
    pub score: f64,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// Output of a scan (`.ahx/scan.json`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanArtifact {
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub files: Vec<ScannedFile>,
    #[serde(default)]
    pub routes_map: RoutesMap,
}

impl ScanArtifact {
    pub fn new(files: Vec<ScannedFile>, routes_map: RoutesMap) -> Self {
        Self {
            generated_at: Utc::now(),
            files,
            routes_map,
        }
    }
}

/// One route audited by the external runtime collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeRouteReport {
    pub route: String,
    pub url: String,
    #[serde(default)]
    pub metrics: RouteMetrics,
    #[serde(default)]
    pub artifacts_path: String,
}

/// Scan plus runtime data with per-route scores (`.ahx/report.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedReport {
    pub generated_at: DateTime<Utc>,
    pub routes: Vec<RouteReport>,
    pub files: Vec<ScannedFile>,
    pub runtime: Vec<RuntimeRouteReport>,
    pub version: String,
}

impl MergedReport {
    /// Score every route of `scan.routes_map`. Runtime metrics are matched
    /// by exact route; when a route was audited twice the last entry wins.
    pub fn merge(
        scan: ScanArtifact,
        runtime: Vec<RuntimeRouteReport>,
        scorer: &HotspotScorer,
    ) -> Self {
        let metrics: FxHashMap<String, RouteMetrics> = runtime
            .iter()
            .map(|r| (r.route.clone(), r.metrics.clone()))
            .collect();
        let routes = RouteAggregator::new(scorer).aggregate(
            &scan.routes_map,
            scan.files.iter().map(|f| &f.report),
            &metrics,
        );
        tracing::debug!(
            routes = routes.len(),
            files = scan.files.len(),
            audited = runtime.len(),
            "merged report"
        );
        Self {
            generated_at: Utc::now(),
            routes,
            files: scan.files,
            runtime,
            version: VERSION.to_string(),
        }
    }

    /// The report written when the scan artifact cannot be read.
    pub fn empty() -> Self {
        Self {
            generated_at: Utc::now(),
            routes: Vec::new(),
            files: Vec::new(),
            runtime: Vec::new(),
            version: VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use ahx_core::{Signal, SignalScore, SuggestionKind};

    use super::*;

    fn scanned(file: &str) -> ScannedFile {
        let mut report = FileReport::new(file);
        report.component_names = vec!["Chart".to_string()];
        report.signals.insert(
            Signal::EagerCharts,
            SignalScore::saturated(1.0, vec!["recharts".to_string()]),
        );
        ScannedFile {
            report,
            score: 10.2,
            suggestions: vec![Suggestion::new(
                SuggestionKind::CodeSplitCharts,
                vec!["recharts".to_string()],
            )],
        }
    }

    #[test]
    fn test_scanned_file_is_flat() {
        let json = serde_json::to_value(scanned("pages/a.tsx")).unwrap();
        assert_eq!(json["file"], "pages/a.tsx");
        assert_eq!(json["score"], 10.2);
        assert_eq!(json["signals"]["eagerCharts"]["detail"][0], "recharts");
        assert_eq!(json["suggestions"][0]["kind"], "codeSplitCharts");
        assert!(json.get("report").is_none());
    }

    #[test]
    fn test_merge_uses_exact_route_metrics() {
        let scan = ScanArtifact::new(
            vec![scanned("pages/a.tsx")],
            RoutesMap::from([
                ("/a".to_string(), vec!["pages/a.tsx".to_string()]),
                ("/b".to_string(), vec!["pages/b.tsx".to_string()]),
            ]),
        );
        let runtime = vec![RuntimeRouteReport {
            route: "/a".to_string(),
            url: "http://localhost:3000/a".to_string(),
            metrics: RouteMetrics {
                lcp: Some(4000.0),
                ..Default::default()
            },
            artifacts_path: ".ahx/runtime/a.json".to_string(),
        }];

        let merged = MergedReport::merge(scan, runtime, &HotspotScorer::default());
        assert_eq!(merged.routes.len(), 2);
        assert_eq!(merged.routes[0].route, "/a");
        assert_eq!(merged.routes[0].score, 12.2);
        assert_eq!(merged.routes[0].metrics.lcp, Some(4000.0));
        assert_eq!(merged.routes[1].score, 0.0);
        assert_eq!(merged.version, VERSION);
    }

    #[test]
    fn test_runtime_report_from_collector_json() {
        let raw = r#"{"route":"/","url":"http://x/","metrics":{"jsBytes":1200,"hydrationMarks":["h1"]},"artifactsPath":"p"}"#;
        let r: RuntimeRouteReport = serde_json::from_str(raw).unwrap();
        assert_eq!(r.metrics.js_bytes, Some(1200));
        assert_eq!(r.metrics.hydration_marks, vec!["h1"]);
        assert_eq!(r.metrics.lcp, None);
    }
}
