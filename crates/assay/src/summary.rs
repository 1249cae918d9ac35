//! Per-column missing-value, dtype, and cardinality summaries.
//!
//! [`ColumnSummarizer`] walks every column of a dataset and reports null
//! accounting, the declared element type, and the number of distinct
//! non-null values, sorted so the most incomplete columns surface first.
//! [`NullMap`] captures the positions of missing cells for a heatmap
//! renderer.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::dtype::ColumnType;
use crate::error::{AssayError, Result};

/// Missing-value and cardinality metrics for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name.
    pub name: String,
    /// Number of non-null values.
    pub count: usize,
    /// Number of null/missing values.
    pub null_count: usize,
    /// `null_count / row_count`, rounded to 4 decimal places.
    pub null_fraction: f64,
    /// Declared element type.
    pub dtype: ColumnType,
    /// Number of distinct non-null values.
    pub unique_count: usize,
}

/// Summarizes every column of a dataset.
pub struct ColumnSummarizer;

impl ColumnSummarizer {
    /// Create a new summarizer.
    pub fn new() -> Self {
        Self
    }

    /// Summarize all columns, sorted by null fraction descending.
    ///
    /// Columns with equal null fractions keep their original relative
    /// order. Fails with [`AssayError::EmptyDataset`] when the dataset
    /// has zero rows, since null fractions are undefined there.
    pub fn summarize(&self, data: &impl Dataset) -> Result<Vec<ColumnSummary>> {
        let row_count = data.row_count();
        if row_count == 0 {
            return Err(AssayError::EmptyDataset(
                "cannot summarize a dataset with zero rows".to_string(),
            ));
        }

        let mut summaries: Vec<ColumnSummary> = data
            .column_names()
            .iter()
            .enumerate()
            .map(|(index, name)| self.summarize_column(data, name, index, row_count))
            .collect();

        // Stable sort: ties keep table order.
        summaries.sort_by(|a, b| b.null_fraction.total_cmp(&a.null_fraction));

        Ok(summaries)
    }

    fn summarize_column(
        &self,
        data: &impl Dataset,
        name: &str,
        index: usize,
        row_count: usize,
    ) -> ColumnSummary {
        let mut null_count = 0usize;
        let mut uniques: IndexSet<&str> = IndexSet::new();

        for row in 0..row_count {
            if data.is_null(row, index) {
                null_count += 1;
            } else {
                uniques.insert(data.raw_value(row, index).trim());
            }
        }

        ColumnSummary {
            name: name.to_string(),
            count: row_count - null_count,
            null_count,
            null_fraction: round4(null_count as f64 / row_count as f64),
            dtype: data.dtype(index),
            unique_count: uniques.len(),
        }
    }
}

impl Default for ColumnSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Row-major mask of null positions, the data behind a null heatmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NullMap {
    /// Column names, in table order.
    pub columns: Vec<String>,
    /// Number of rows covered by the mask.
    pub row_count: usize,
    /// Row-major flags, true = null. Length is `row_count * columns.len()`.
    pub mask: Vec<bool>,
}

impl NullMap {
    /// Build the null mask for a dataset.
    pub fn from_dataset(data: &impl Dataset) -> Self {
        let columns: Vec<String> = data.column_names().to_vec();
        let row_count = data.row_count();
        let mut mask = Vec::with_capacity(row_count * columns.len());

        for row in 0..row_count {
            for col in 0..columns.len() {
                mask.push(data.is_null(row, col));
            }
        }

        Self {
            columns,
            row_count,
            mask,
        }
    }

    /// Whether the cell at (`row`, `col`) is null.
    pub fn is_null(&self, row: usize, col: usize) -> bool {
        self.mask[row * self.columns.len() + col]
    }

    /// Total nulls per column, in table order.
    pub fn column_null_counts(&self) -> Vec<usize> {
        let width = self.columns.len();
        let mut counts = vec![0usize; width];
        for (i, &is_null) in self.mask.iter().enumerate() {
            if is_null {
                counts[i % width] += 1;
            }
        }
        counts
    }
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
