//! In-memory table and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::dtype::{self, ColumnType};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a loaded file.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            analyzed_at: Utc::now(),
        }
    }
}

/// Parsed tabular data with per-column declared types.
///
/// Cells are stored as raw text in row-major order; element types are
/// inferred once at construction from the non-null cells of each column.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
    /// Declared element type per column.
    dtypes: Vec<ColumnType>,
}

impl DataTable {
    /// Create a new data table, inferring per-column element types.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        let dtypes = (0..headers.len())
            .map(|col| {
                dtype::infer_column_dtype(
                    rows.iter()
                        .map(move |row| row.get(col).map(|s| s.as_str()).unwrap_or(""))
                        .filter(|v| !Self::is_null_value(v)),
                )
            })
            .collect();

        Self {
            headers,
            rows,
            delimiter,
            dtypes,
        }
    }

    /// Get all raw values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(|s| s.as_str()).unwrap_or(""))
    }

    /// Get all raw values for a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Check if a value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || trimmed.eq_ignore_ascii_case("nil")
            || trimmed == "."
            || trimmed == "-"
    }
}

impl Dataset for DataTable {
    fn column_names(&self) -> &[String] {
        &self.headers
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn dtype(&self, index: usize) -> ColumnType {
        self.dtypes.get(index).copied().unwrap_or_default()
    }

    fn raw_value(&self, row: usize, index: usize) -> &str {
        self.get(row, index).unwrap_or("")
    }

    fn is_null(&self, row: usize, index: usize) -> bool {
        Self::is_null_value(self.raw_value(row, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_is_null_value() {
        assert!(DataTable::is_null_value(""));
        assert!(DataTable::is_null_value("NA"));
        assert!(DataTable::is_null_value("n/a"));
        assert!(DataTable::is_null_value("NULL"));
        assert!(DataTable::is_null_value("."));
        assert!(DataTable::is_null_value("-"));
        assert!(!DataTable::is_null_value("value"));
        assert!(!DataTable::is_null_value("0"));
    }

    #[test]
    fn test_dtype_inference_at_construction() {
        let table = make_table(
            vec!["age", "score", "name"],
            vec![
                vec!["25", "1.5", "Alice"],
                vec!["30", "NA", "Bob"],
                vec!["28", "2.25", "Cleo"],
            ],
        );

        assert_eq!(table.dtype(0), ColumnType::Integer);
        assert_eq!(table.dtype(1), ColumnType::Float);
        assert_eq!(table.dtype(2), ColumnType::Text);
    }

    #[test]
    fn test_fully_null_column_is_unknown() {
        let table = make_table(
            vec!["empty"],
            vec![vec!["NA"], vec![""], vec!["null"]],
        );
        assert_eq!(table.dtype(0), ColumnType::Unknown);
    }

    #[test]
    fn test_dataset_trait_access() {
        let table = make_table(
            vec!["x", "y"],
            vec![vec!["1", "a"], vec!["NA", "b"]],
        );

        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_index("y"), Some(1));
        assert_eq!(table.numeric_value(0, 0), Some(1.0));
        assert_eq!(table.numeric_value(1, 0), None);
        assert!(table.is_null(1, 0));
        assert_eq!(table.raw_value(0, 1), "a");
    }

    #[test]
    fn test_ragged_row_reads_empty() {
        let table = make_table(vec!["a", "b"], vec![vec!["1"]]);
        assert_eq!(table.raw_value(0, 1), "");
        assert!(table.is_null(0, 1));
    }

    #[test]
    fn test_column_by_name() {
        let table = make_table(vec!["a", "b"], vec![vec!["1", "2"], vec!["3", "4"]]);
        assert_eq!(table.column_by_name("b"), Some(vec!["2", "4"]));
        assert_eq!(table.column_by_name("zzz"), None);
    }
}
