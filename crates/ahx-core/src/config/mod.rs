//! Configuration system for ahx.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod ahx_config;
pub mod analysis_config;
pub mod budget_config;
pub mod scan_config;
pub mod scoring_config;
pub mod suggestion_config;

pub use ahx_config::{AhxConfig, CliOverrides};
pub use analysis_config::AnalysisConfig;
pub use budget_config::BudgetConfig;
pub use scan_config::ScanConfig;
pub use scoring_config::ScoringConfig;
pub use suggestion_config::SuggestionConfig;
