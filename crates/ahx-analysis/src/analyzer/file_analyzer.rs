//! FileAnalyzer: source text in, `FileReport` out.

use std::path::Path;

use ahx_core::config::AnalysisConfig;
use ahx_core::errors::{ConfigError, ParseError};
use ahx_core::FileReport;

use super::components::component_names;
use crate::parsers::{ParsedFile, SyntaxIndex};
use crate::signals::ExtractorRegistry;

/// Runs the extractor registry over one file at a time. Shareable across
/// threads; holds no per-file state.
pub struct FileAnalyzer {
    registry: ExtractorRegistry,
    reject_syntax_errors: bool,
}

impl FileAnalyzer {
    pub fn new() -> Self {
        Self {
            registry: ExtractorRegistry::new(),
            reject_syntax_errors: false,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: ExtractorRegistry::from_config(config)?,
            reject_syntax_errors: config.effective_reject_syntax_errors(),
        })
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Analyze `source` as the file at `path`. The client flag is left false;
    /// see [`FileAnalyzer::analyze_with_client_flag`].
    pub fn analyze(&self, source: &str, path: &Path) -> Result<FileReport, ParseError> {
        self.analyze_with_client_flag(source, path, false)
    }

    pub fn analyze_with_client_flag(
        &self,
        source: &str,
        path: &Path,
        is_client: bool,
    ) -> Result<FileReport, ParseError> {
        let file = self.parse(source, path)?;
        let syntax = file.syntax();
        Ok(self.report(&file, &syntax, is_client))
    }

    /// Parse with this analyzer's syntax-error policy.
    pub fn parse(&self, source: &str, path: &Path) -> Result<ParsedFile, ParseError> {
        ParsedFile::parse_with(source, path, self.reject_syntax_errors)
    }

    /// Build the report from an already indexed file.
    pub fn report(
        &self,
        file: &ParsedFile,
        syntax: &SyntaxIndex<'_>,
        is_client: bool,
    ) -> FileReport {
        let mut report = FileReport::new(file.path().display().to_string());
        report.component_names = component_names(syntax);
        report.signals = self.registry.extract_all(file, syntax);
        report.is_client_component = is_client;

        tracing::trace!(
            file = %report.file,
            language = file.language().name(),
            components = report.component_names.len(),
            signals = report.signals.len(),
            parse_us = file.parse_time_us(),
            "analyzed file"
        );
        report
    }
}

impl Default for FileAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
