//! Tests for the ahx configuration system.

use std::sync::Mutex;

use ahx_core::config::{AhxConfig, CliOverrides};
use ahx_core::errors::ConfigError;
use ahx_core::types::Signal;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all AHX_ env vars and point HOME at an empty directory so the
/// developer's own user config never leaks into a test.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "AHX_SCAN_MAX_FILE_SIZE",
        "AHX_SCAN_THREADS",
        "AHX_ANALYSIS_REJECT_SYNTAX_ERRORS",
        "AHX_BUDGET_JS_BYTES",
        "AHX_BUDGET_TBT",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::fs::create_dir_all(home.path().join(".ahx")).unwrap();
    std::fs::write(
        home.path().join(".ahx/config.toml"),
        r#"
[budgets]
js_bytes = 100
tbt = 50.0

[scan]
threads = 2
"#,
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("ahx.toml"),
        r#"
[budgets]
js_bytes = 600_000

[scan]
max_file_size = 2_000_000
"#,
    )
    .unwrap();

    std::env::set_var("AHX_SCAN_MAX_FILE_SIZE", "5000000");

    let cli = CliOverrides {
        budget_tbt: Some(200.0),
        ..Default::default()
    };
    let config = AhxConfig::load(dir.path(), Some(&cli)).unwrap();

    // project beats user
    assert_eq!(config.budgets.js_bytes, Some(600_000));
    // CLI beats user
    assert_eq!(config.budgets.tbt, Some(200.0));
    // env beats project
    assert_eq!(config.scan.max_file_size, Some(5_000_000));
    // user survives where nothing overrides it
    assert_eq!(config.scan.threads, Some(2));

    std::env::remove_var("AHX_SCAN_MAX_FILE_SIZE");
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = AhxConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scan.effective_max_file_size(), 1_048_576);
    assert_eq!(config.scan.effective_source_dirs(), vec!["src", "pages", "app"]);
    assert_eq!(config.scan.effective_extensions(), vec!["js", "ts", "jsx", "tsx"]);
    assert_eq!(config.analysis.effective_object_props_threshold(), 5);
    assert_eq!(config.analysis.effective_array_elements_threshold(), 10);
    assert_eq!(config.analysis.effective_literal_text_threshold(), 200);
    assert!(!config.analysis.effective_reject_syntax_errors());
    assert_eq!(config.suggestions.effective_effect_statements_min(), 5.0);
    assert_eq!(config.suggestions.effective_event_handlers_min(), 5.0);
    assert_eq!(config.suggestions.effective_context_sites_min(), 2.0);
    assert!(config.budgets.is_unlimited());
    assert!(config.scoring.weight_overrides().unwrap().is_empty());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("ahx.toml"), "this is not valid toml {{{{").unwrap();

    match AhxConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_unknown_signal_weight_rejected() {
    let result = AhxConfig::from_toml(
        r#"
[scoring.weights]
bundleFootprint = 2.0
hydrationDebt = 1.0
"#,
    );
    match result {
        Err(ConfigError::UnknownSignal { field, name }) => {
            assert_eq!(field, "scoring.weights.hydrationDebt");
            assert_eq!(name, "hydrationDebt");
        }
        other => panic!("Expected UnknownSignal, got: {:?}", other),
    }
}

#[test]
fn test_negative_weight_rejected() {
    let result = AhxConfig::from_toml("[scoring.weights]\neagerCharts = -1.0\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_weight_overrides_resolve_in_signal_order() {
    let config = AhxConfig::from_toml(
        r#"
[scoring.weights]
contextAtRoot = 2.0
effectHeaviness = 0.5
"#,
    )
    .unwrap();
    let overrides = config.scoring.weight_overrides().unwrap();
    assert_eq!(
        overrides,
        vec![(Signal::EffectHeaviness, 0.5), (Signal::ContextAtRoot, 2.0)]
    );
}

#[test]
fn test_unknown_disabled_signal_rejected() {
    let result = AhxConfig::from_toml("[analysis]\ndisabled_signals = [\"nope\"]\n");
    assert!(matches!(result, Err(ConfigError::UnknownSignal { .. })));

    let config =
        AhxConfig::from_toml("[analysis]\ndisabled_signals = [\"eventDensity\"]\n").unwrap();
    assert!(!config.analysis.is_enabled(Signal::EventDensity));
    assert!(config.analysis.is_enabled(Signal::EagerCharts));
}

#[test]
fn test_zero_max_file_size_rejected() {
    let result = AhxConfig::from_toml("[scan]\nmax_file_size = 0\n");
    assert!(matches!(result, Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_toml_round_trip() {
    let config = AhxConfig::from_toml(
        r#"
[scan]
source_dirs = ["web"]
extensions = [".tsx"]

[budgets]
js_bytes = 600000
tbt = 200.0
"#,
    )
    .unwrap();
    assert_eq!(config.scan.effective_extensions(), vec!["tsx"]);

    let text = config.to_toml().unwrap();
    let reparsed = AhxConfig::from_toml(&text).unwrap();
    assert_eq!(reparsed.scan.source_dirs, vec!["web"]);
    assert_eq!(reparsed.budgets.js_bytes, Some(600_000));
    assert_eq!(reparsed.budgets.tbt, Some(200.0));
}
