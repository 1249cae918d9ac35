//! Assay: exploratory data analysis toolkit for tabular datasets.
//!
//! Assay reports per-column missing-value, dtype, and cardinality
//! summaries, and analyzes the distribution of numeric columns to classify
//! relative variability and recommend an imputation strategy.
//!
//! # Core Principles
//!
//! - **Read-only**: the input dataset is never modified; Assay reports
//!   statistics and recommends actions, it does not execute them
//! - **Computation apart from display**: charts and console narration are
//!   collaborators behind explicit seams, fed already-computed values
//! - **Degenerate data is a result, not an error**: an invalid coefficient
//!   of variation is encoded in the record, never an abort
//!
//! # Example
//!
//! ```no_run
//! use assay::Assay;
//!
//! let assay = Assay::new();
//! let profile = assay.profile("measurements.csv").unwrap();
//!
//! for col in &profile.summaries {
//!     println!("{}: {:.1}% null", col.name, col.null_fraction * 100.0);
//! }
//!
//! let analysis = assay.distribution("measurements.csv", "temperature").unwrap();
//! println!("impute with the {}", analysis.recommendation.label());
//! ```

pub mod dataset;
pub mod distribution;
pub mod dtype;
pub mod error;
pub mod input;
pub mod render;
pub mod report;
pub mod summary;

mod assay;

pub use crate::assay::{Assay, AssayConfig, ProfileResult};
pub use dataset::Dataset;
pub use distribution::{
    CvCategory, DescriptiveStats, DistributionAnalysis, DistributionAnalyzer,
    ImputationStrategy, Skew,
};
pub use dtype::ColumnType;
pub use error::{AssayError, Result};
pub use input::{DataTable, Loader, LoaderConfig, SourceMetadata};
pub use render::{DistributionRenderer, DistributionView, NullMapRenderer, RenderContext};
pub use summary::{ColumnSummarizer, ColumnSummary, NullMap};
