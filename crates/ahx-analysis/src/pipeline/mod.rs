//! Batch analysis: many sources in, scored files and a scan artifact out.

use std::path::{Path, PathBuf};

use ahx_core::config::AhxConfig;
use ahx_core::errors::{ConfigError, ParseError, PipelineResult};
use rayon::prelude::*;

use crate::analyzer::{has_use_client_directive, FileAnalyzer};
use crate::report::{ScanArtifact, ScannedFile};
use crate::scanner::{build_routes_map, hash_content};
use crate::scoring::HotspotScorer;
use crate::suggestions::SuggestionEngine;

/// One `(path, source text)` pair to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub path: PathBuf,
    pub source: String,
}

impl SourceInput {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Key for callers that memoize results across runs.
    pub fn content_hash(&self) -> String {
        hash_content(self.source.as_bytes())
    }
}

pub struct ScanPipeline {
    analyzer: FileAnalyzer,
    scorer: HotspotScorer,
    suggestions: SuggestionEngine,
    threads: usize,
}

impl ScanPipeline {
    pub fn new(analyzer: FileAnalyzer, scorer: HotspotScorer, suggestions: SuggestionEngine) -> Self {
        Self {
            analyzer,
            scorer,
            suggestions,
            threads: 0,
        }
    }

    pub fn from_config(config: &AhxConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            analyzer: FileAnalyzer::from_config(&config.analysis)?,
            scorer: HotspotScorer::from_config(&config.scoring)?,
            suggestions: SuggestionEngine::from_config(&config.suggestions),
            threads: config.scan.effective_threads(),
        })
    }

    pub fn scorer(&self) -> &HotspotScorer {
        &self.scorer
    }

    /// Analyze, classify, score, and suggest for a single source.
    pub fn analyze_one(&self, input: &SourceInput) -> Result<ScannedFile, ParseError> {
        let file = self.analyzer.parse(&input.source, &input.path)?;
        let syntax = file.syntax();
        let is_client = has_use_client_directive(&syntax);
        let report = self.analyzer.report(&file, &syntax, is_client);
        let score = self.scorer.score(&report, None);
        let suggestions = self.suggestions.suggest(&report);
        Ok(ScannedFile {
            report,
            score,
            suggestions,
        })
    }

    /// Analyze every input in parallel. Files that fail to parse are skipped
    /// and reported as non-fatal errors; output order follows input order.
    pub fn run(&self, inputs: &[SourceInput]) -> PipelineResult<Vec<ScannedFile>> {
        let analyze_all = || -> Vec<Result<ScannedFile, ParseError>> {
            inputs.par_iter().map(|input| self.analyze_one(input)).collect()
        };
        let outcomes = match self.thread_pool() {
            Some(pool) => pool.install(analyze_all),
            None => analyze_all(),
        };

        let mut result = PipelineResult::<Vec<ScannedFile>>::default();
        for outcome in outcomes {
            match outcome {
                Ok(scanned) => result.data.push(scanned),
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e, "skipping file");
                    result.add_error(e.into());
                }
            }
        }
        tracing::info!(
            analyzed = result.data.len(),
            skipped = result.error_count(),
            "scan complete"
        );
        result
    }

    /// Run over `inputs` and package the results with a routes map built
    /// from every input path, including skipped ones.
    pub fn build_artifact(&self, root: &Path, inputs: &[SourceInput]) -> PipelineResult<ScanArtifact> {
        let routes_map = build_routes_map(inputs.iter().map(|i| i.path.as_path()), root);
        self.run(inputs)
            .map(|files| ScanArtifact::new(files, routes_map))
    }

    fn thread_pool(&self) -> Option<rayon::ThreadPool> {
        if self.threads == 0 {
            return None;
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| tracing::warn!(error = %e, "falling back to the global thread pool"))
            .ok()
    }
}

impl Default for ScanPipeline {
    fn default() -> Self {
        Self::new(
            FileAnalyzer::new(),
            HotspotScorer::default(),
            SuggestionEngine::new(),
        )
    }
}
