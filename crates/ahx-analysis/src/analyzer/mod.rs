//! Per-file analysis: component detection, directive classification, and
//! signal extraction into a `FileReport`.

pub mod components;
pub mod directive;
pub mod file_analyzer;

pub use components::{component_names, is_component, returns_markup};
pub use directive::has_use_client_directive;
pub use file_analyzer::FileAnalyzer;
