//! Registry of signal extractors.

use std::collections::BTreeMap;

use ahx_core::config::AnalysisConfig;
use ahx_core::errors::ConfigError;
use ahx_core::{Signal, SignalScore};

use super::{
    BundleFootprintExtractor, ClientOnlyApisExtractor, ContextAtRootExtractor,
    EagerChartsExtractor, EffectHeavinessExtractor, EventDensityExtractor,
    LargeLiteralPropsExtractor, SignalExtractor,
};
use crate::parsers::{ParsedFile, SyntaxIndex};

/// Ordered set of extractors run against every file.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn SignalExtractor>>,
}

impl ExtractorRegistry {
    /// All seven built-in extractors with default thresholds.
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(EffectHeavinessExtractor),
                Box::new(ClientOnlyApisExtractor),
                Box::new(BundleFootprintExtractor),
                Box::new(EventDensityExtractor),
                Box::new(EagerChartsExtractor::new()),
                Box::new(LargeLiteralPropsExtractor::default()),
                Box::new(ContextAtRootExtractor),
            ],
        }
    }

    /// Built-in extractors tuned by `[analysis]`, minus disabled signals.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        // Rejects unknown signal names.
        config.disabled()?;
        let literal_props = LargeLiteralPropsExtractor {
            object_props: config.effective_object_props_threshold(),
            array_elements: config.effective_array_elements_threshold(),
            text_len: config.effective_literal_text_threshold(),
        };
        let all: Vec<Box<dyn SignalExtractor>> = vec![
            Box::new(EffectHeavinessExtractor),
            Box::new(ClientOnlyApisExtractor),
            Box::new(BundleFootprintExtractor),
            Box::new(EventDensityExtractor),
            Box::new(EagerChartsExtractor::with_extra(&config.extra_chart_packages)),
            Box::new(literal_props),
            Box::new(ContextAtRootExtractor),
        ];
        let extractors = all
            .into_iter()
            .filter(|e| config.is_enabled(e.signal()))
            .collect();
        Ok(Self { extractors })
    }

    pub fn register(&mut self, extractor: Box<dyn SignalExtractor>) {
        self.extractors.push(extractor);
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.extractors.iter().map(|e| e.signal()).collect()
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Run every extractor; undetected signals are omitted.
    pub fn extract_all(
        &self,
        file: &ParsedFile,
        syntax: &SyntaxIndex<'_>,
    ) -> BTreeMap<Signal, SignalScore> {
        self.extractors
            .iter()
            .filter_map(|e| e.extract(file, syntax).map(|score| (e.signal(), score)))
            .collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
