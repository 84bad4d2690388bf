//! `AhxConfig`: every `[section]` of `ahx.toml` plus its override layers.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, BudgetConfig, ScanConfig, ScoringConfig, SuggestionConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Engine configuration.
///
/// Layers, later ones winning:
/// 1. built-in defaults
/// 2. `~/.ahx/config.toml`
/// 3. `<root>/ahx.toml`
/// 4. `AHX_*` environment variables
/// 5. [`CliOverrides`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AhxConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
    pub scoring: ScoringConfig,
    pub suggestions: SuggestionConfig,
    pub budgets: BudgetConfig,
}

/// Values a command-line front end may force.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source_dirs: Option<Vec<String>>,
    pub threads: Option<usize>,
    pub budget_js_bytes: Option<u64>,
    pub budget_tbt: Option<f64>,
}

impl AhxConfig {
    /// Resolve all layers for the project at `root`, then validate.
    ///
    /// A user config that cannot be read is skipped with a warning; one that
    /// does not parse is an error, as is any problem with the project file.
    pub fn load(root: &Path, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user) = user_config_path().filter(|p| p.is_file()) {
            match read_layer(&user) {
                Ok(layer) => config.overlay(&layer),
                Err(e @ ConfigError::Unreadable { .. }) => {
                    ::tracing::warn!(path = %user.display(), error = %e, "skipping user config");
                }
                Err(e) => return Err(e),
            }
        }

        let project = root.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            config.overlay(&read_layer(&project)?);
        }

        config.apply_env();
        if let Some(cli) = cli {
            config.apply_cli(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a single TOML document (no layering) and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config = parse_layer(toml_str, "<string>")?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the engine would otherwise reject later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.disabled()?;
        self.scoring.weight_overrides()?;

        if self.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be at least 1 byte".to_string(),
            });
        }

        let thresholds = [
            ("suggestions.effect_statements_min", self.suggestions.effect_statements_min),
            ("suggestions.event_handlers_min", self.suggestions.event_handlers_min),
            ("suggestions.context_sites_min", self.suggestions.context_sites_min),
            ("budgets.tbt", self.budgets.tbt),
        ];
        for (field, value) in thresholds {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Copy every value `layer` sets onto `self`. Lists replace, weights
    /// merge per signal.
    fn overlay(&mut self, layer: &AhxConfig) {
        let scan = &layer.scan;
        replace_if_nonempty(&mut self.scan.source_dirs, &scan.source_dirs);
        replace_if_nonempty(&mut self.scan.extensions, &scan.extensions);
        self.scan.max_file_size = scan.max_file_size.or(self.scan.max_file_size);
        self.scan.threads = scan.threads.or(self.scan.threads);
        self.scan.follow_symlinks = scan.follow_symlinks.or(self.scan.follow_symlinks);

        let analysis = &layer.analysis;
        replace_if_nonempty(&mut self.analysis.disabled_signals, &analysis.disabled_signals);
        replace_if_nonempty(
            &mut self.analysis.extra_chart_packages,
            &analysis.extra_chart_packages,
        );
        self.analysis.reject_syntax_errors =
            analysis.reject_syntax_errors.or(self.analysis.reject_syntax_errors);
        self.analysis.object_props_threshold =
            analysis.object_props_threshold.or(self.analysis.object_props_threshold);
        self.analysis.array_elements_threshold =
            analysis.array_elements_threshold.or(self.analysis.array_elements_threshold);
        self.analysis.literal_text_threshold =
            analysis.literal_text_threshold.or(self.analysis.literal_text_threshold);

        self.scoring
            .weights
            .extend(layer.scoring.weights.iter().map(|(k, v)| (k.clone(), *v)));

        let suggestions = &layer.suggestions;
        self.suggestions.effect_statements_min = suggestions
            .effect_statements_min
            .or(self.suggestions.effect_statements_min);
        self.suggestions.event_handlers_min = suggestions
            .event_handlers_min
            .or(self.suggestions.event_handlers_min);
        self.suggestions.context_sites_min = suggestions
            .context_sites_min
            .or(self.suggestions.context_sites_min);

        self.budgets.js_bytes = layer.budgets.js_bytes.or(self.budgets.js_bytes);
        self.budgets.tbt = layer.budgets.tbt.or(self.budgets.tbt);
    }

    /// `AHX_SCAN_MAX_FILE_SIZE`, `AHX_SCAN_THREADS`,
    /// `AHX_ANALYSIS_REJECT_SYNTAX_ERRORS`, `AHX_BUDGET_JS_BYTES`,
    /// `AHX_BUDGET_TBT`. Unparsable values are ignored.
    fn apply_env(&mut self) {
        if let Some(v) = env_value("AHX_SCAN_MAX_FILE_SIZE") {
            self.scan.max_file_size = Some(v);
        }
        if let Some(v) = env_value("AHX_SCAN_THREADS") {
            self.scan.threads = Some(v);
        }
        if let Some(v) = env_value("AHX_ANALYSIS_REJECT_SYNTAX_ERRORS") {
            self.analysis.reject_syntax_errors = Some(v);
        }
        if let Some(v) = env_value("AHX_BUDGET_JS_BYTES") {
            self.budgets.js_bytes = Some(v);
        }
        if let Some(v) = env_value("AHX_BUDGET_TBT") {
            self.budgets.tbt = Some(v);
        }
    }

    fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(dirs) = &cli.source_dirs {
            self.scan.source_dirs = dirs.clone();
        }
        self.scan.threads = cli.threads.or(self.scan.threads);
        self.budgets.js_bytes = cli.budget_js_bytes.or(self.budgets.js_bytes);
        self.budgets.tbt = cli.budget_tbt.or(self.budgets.tbt);
    }
}

fn read_layer(path: &Path) -> Result<AhxConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_layer(&raw, &path.display().to_string())
}

/// Unknown keys are ignored so older engines accept newer files.
fn parse_layer(raw: &str, origin: &str) -> Result<AhxConfig, ConfigError> {
    toml::from_str(raw).map_err(|e| ConfigError::ParseError {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

fn replace_if_nonempty(target: &mut Vec<String>, layer: &[String]) {
    if !layer.is_empty() {
        *target = layer.to_vec();
    }
}

fn env_value<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.parse().ok()
}

/// `~/.ahx/config.toml`, using `HOME` or `USERPROFILE`.
fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".ahx").join("config.toml"))
}
