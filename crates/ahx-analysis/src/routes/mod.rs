//! Route aggregation: a route is as risky as its worst file.

use std::collections::BTreeMap;

use ahx_core::{FileReport, RouteMetrics, RouteReport};
use rustc_hash::FxHashMap;

use crate::scoring::HotspotScorer;

/// Route path to the files that make it up.
pub type RoutesMap = BTreeMap<String, Vec<String>>;

pub struct RouteAggregator<'s> {
    scorer: &'s HotspotScorer,
}

impl<'s> RouteAggregator<'s> {
    pub fn new(scorer: &'s HotspotScorer) -> Self {
        Self { scorer }
    }

    /// One `RouteReport` per entry of `routes_map`, in map order. Each file
    /// is scored together with its route's metrics (exact route match);
    /// files with no report score 0.
    pub fn aggregate<'r>(
        &self,
        routes_map: &RoutesMap,
        reports: impl IntoIterator<Item = &'r FileReport>,
        metrics: &FxHashMap<String, RouteMetrics>,
    ) -> Vec<RouteReport> {
        let by_file: FxHashMap<&str, &FileReport> =
            reports.into_iter().map(|r| (r.file.as_str(), r)).collect();

        routes_map
            .iter()
            .map(|(route, files)| {
                let route_metrics = metrics.get(route);
                let score = files
                    .iter()
                    .filter_map(|file| by_file.get(file.as_str()))
                    .map(|report| self.scorer.score(report, route_metrics))
                    .fold(0.0, f64::max);
                RouteReport {
                    route: route.clone(),
                    score,
                    metrics: route_metrics.cloned().unwrap_or_default(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use ahx_core::{Signal, SignalScore};

    use super::*;

    #[test]
    fn test_missing_files_and_empty_routes_score_zero() {
        let scorer = HotspotScorer::default();
        let routes = RoutesMap::from([
            ("/".to_string(), vec!["missing.tsx".to_string()]),
            ("/empty".to_string(), vec![]),
        ]);
        let out = RouteAggregator::new(&scorer).aggregate(&routes, &[], &FxHashMap::default());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.score == 0.0 && r.metrics.is_empty()));
    }

    #[test]
    fn test_metrics_raise_route_score() {
        let scorer = HotspotScorer::default();
        let mut report = FileReport::new("pages/a.tsx");
        report
            .signals
            .insert(Signal::EagerCharts, SignalScore::saturated(1.0, vec![]));
        let routes = RoutesMap::from([("/a".to_string(), vec!["pages/a.tsx".to_string()])]);
        let mut metrics = FxHashMap::default();
        metrics.insert(
            "/a".to_string(),
            RouteMetrics {
                tbt: Some(600.0),
                ..Default::default()
            },
        );

        let plain = RouteAggregator::new(&scorer).aggregate(
            &routes,
            [&report],
            &FxHashMap::default(),
        );
        let with_metrics = RouteAggregator::new(&scorer).aggregate(&routes, [&report], &metrics);
        // 1.4 * (7 + log10(2)), plus 2 points of TBT
        assert_eq!(plain[0].score, 10.2);
        assert_eq!(with_metrics[0].score, 12.2);
        assert_eq!(with_metrics[0].metrics.tbt, Some(600.0));
    }
}
