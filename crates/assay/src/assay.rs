//! Main Assay struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distribution::{DistributionAnalysis, DistributionAnalyzer};
use crate::error::Result;
use crate::input::{Loader, LoaderConfig, SourceMetadata};
use crate::summary::{ColumnSummarizer, ColumnSummary, NullMap};

/// Configuration for Assay analysis.
#[derive(Debug, Clone, Default)]
pub struct AssayConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
}

/// Result of profiling a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Per-column summaries, sorted by null fraction descending.
    pub summaries: Vec<ColumnSummary>,
    /// Null-position mask for heatmap rendering.
    pub null_map: NullMap,
}

impl ProfileResult {
    /// Pretty-printed JSON of this result, for downstream collaborators.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// File-level entry point tying the loader to the analysis components.
pub struct Assay {
    loader: Loader,
    summarizer: ColumnSummarizer,
    analyzer: DistributionAnalyzer,
}

impl Assay {
    /// Create an Assay instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(AssayConfig::default())
    }

    /// Create an Assay instance with custom configuration.
    pub fn with_config(config: AssayConfig) -> Self {
        Self {
            loader: Loader::with_config(config.loader),
            summarizer: ColumnSummarizer::new(),
            analyzer: DistributionAnalyzer::new(),
        }
    }

    /// Load a file and profile every column.
    pub fn profile(&self, path: impl AsRef<Path>) -> Result<ProfileResult> {
        let (table, source) = self.loader.load_file(path)?;
        let summaries = self.summarizer.summarize(&table)?;
        let null_map = NullMap::from_dataset(&table);

        Ok(ProfileResult {
            source,
            summaries,
            null_map,
        })
    }

    /// Load a file and analyze the distribution of one numeric column.
    pub fn distribution(
        &self,
        path: impl AsRef<Path>,
        column: &str,
    ) -> Result<DistributionAnalysis> {
        let (table, _) = self.loader.load_file(path)?;
        self.analyzer.analyze(&table, column)
    }
}

impl Default for Assay {
    fn default() -> Self {
        Self::new()
    }
}
