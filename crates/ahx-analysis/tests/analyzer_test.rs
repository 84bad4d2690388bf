//! FileAnalyzer and ScanPipeline over the next-basic fixture project.

use std::path::{Path, PathBuf};

use ahx_analysis::{ScanPipeline, SourceInput};
use ahx_core::{Signal, SuggestionKind};

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/next-basic")
}

fn load(relative: &str) -> SourceInput {
    let path = fixture_root().join(relative);
    let source = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    SourceInput::new(path, source)
}

#[test]
fn test_heavy_page() {
    let scanned = ScanPipeline::default()
        .analyze_one(&load("pages/heavy.tsx"))
        .unwrap();
    let report = &scanned.report;

    assert_eq!(report.component_names, vec!["Totals", "Heavy"]);
    assert!(!report.is_client_component);

    let effect = report.signal(Signal::EffectHeaviness).unwrap();
    assert_eq!(effect.score, 5.0);
    assert_eq!(effect.detail, vec!["useEffect at 5: 5 statements"]);
    assert_eq!(
        report.signal(Signal::ClientOnlyApis).unwrap().detail,
        vec!["window at 10"]
    );
    assert!(report.signal(Signal::BundleFootprint).is_none());

    // 1.0 * (7 + log10(6)) + 1.0 * (7 + log10(2))
    assert_eq!(scanned.score, 15.1);
    // Server component: only unconditional rules apply, and neither fires.
    assert!(scanned.suggestions.is_empty());
}

#[test]
fn test_client_dashboard() {
    let scanned = ScanPipeline::default()
        .analyze_one(&load("pages/dashboard.tsx"))
        .unwrap();
    let report = &scanned.report;

    assert!(report.is_client_component);
    assert_eq!(report.component_names, vec!["Panel", "Dashboard"]);

    let bundle = report.signal(Signal::BundleFootprint).unwrap();
    let widget = fixture_root().join("src/widgets/index.tsx");
    let widget_size = std::fs::metadata(&widget).unwrap().len();
    assert_eq!(bundle.score, widget_size as f64);
    assert_eq!(bundle.detail[0], "pkg:react");
    assert_eq!(bundle.detail[1], "pkg:recharts");
    assert!(bundle.detail[2].starts_with("local:../src/widgets => "));
    assert!(bundle.detail[2].ends_with(&format!("index.tsx ({widget_size} bytes)")));

    assert_eq!(report.signal(Signal::EagerCharts).unwrap().detail, vec!["recharts"]);
    assert_eq!(
        report.signal(Signal::EventDensity).unwrap().detail,
        vec!["onClick at 14", "onMouseEnter at 15"]
    );
    let props = report.signal(Signal::LargeLiteralProps).unwrap();
    assert_eq!(props.score, 2.0);
    assert!(props.detail[0].starts_with("data array len=12 "));
    assert!(props.detail[1].starts_with("options object props=6 "));
    assert_eq!(
        report.signal(Signal::ContextAtRoot).unwrap().detail,
        vec!["createContext at 7", "useContext at 10", "ThemeContext.Provider at 26"]
    );

    let kinds: Vec<_> = scanned.suggestions.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SuggestionKind::MemoizeLargeProps,
            SuggestionKind::SplitBundle,
            SuggestionKind::CodeSplitCharts,
            SuggestionKind::MoveContextDown,
        ]
    );
    assert!(scanned.score <= 20.0);
}

#[test]
fn test_signal_free_page_scores_zero() {
    let scanned = ScanPipeline::default()
        .analyze_one(&load("pages/blog/index.tsx"))
        .unwrap();
    assert_eq!(scanned.report.component_names, vec!["BlogIndex"]);
    assert_eq!(scanned.score, 0.0);
}

#[test]
fn test_syntax_errors_tolerated_by_default() {
    let scanned = ScanPipeline::default()
        .analyze_one(&load("src/components/Broken.tsx"))
        .unwrap();
    assert_eq!(scanned.report.file, load("src/components/Broken.tsx").path.display().to_string());
}
