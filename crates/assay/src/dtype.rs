//! Column element types and type inference.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Date patterns compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(),  // ISO date
        Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(),  // US date
        Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(),  // European date
        Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(),  // Alt ISO
    ]
});

/// Declared element type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Boolean values (true/false).
    Boolean,
    /// Date only (no time component).
    Date,
    /// Date and time values.
    DateTime,
    /// Free text.
    Text,
    /// Unable to determine type (e.g. fully null column).
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Returns true if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::DateTime)
    }

    /// Short lowercase label, suitable for tabular display.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Text => "text",
            ColumnType::Unknown => "unknown",
        }
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Unknown
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect the type of a single cell value.
pub fn detect_value_dtype(value: &str) -> ColumnType {
    let trimmed = value.trim();

    if matches!(
        trimmed.to_lowercase().as_str(),
        "true" | "false" | "yes" | "no"
    ) {
        return ColumnType::Boolean;
    }

    if trimmed.parse::<i64>().is_ok() {
        return ColumnType::Integer;
    }

    if trimmed.parse::<f64>().is_ok() {
        return ColumnType::Float;
    }

    if looks_like_date(trimmed) {
        if trimmed.contains(':') || trimmed.contains('T') {
            return ColumnType::DateTime;
        }
        return ColumnType::Date;
    }

    ColumnType::Text
}

/// Infer a column's element type by majority vote over non-null cells.
///
/// A column mixing integers and floats is promoted to [`ColumnType::Float`];
/// a column with no non-null cells stays [`ColumnType::Unknown`].
pub fn infer_column_dtype<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut type_counts: HashMap<ColumnType, usize> = HashMap::new();
    let mut total = 0usize;

    for value in values {
        *type_counts.entry(detect_value_dtype(value)).or_insert(0) += 1;
        total += 1;
    }

    if total == 0 {
        return ColumnType::Unknown;
    }

    let best_type = type_counts
        .iter()
        .max_by_key(|&(_, count)| *count)
        .map(|(t, _)| *t)
        .unwrap_or(ColumnType::Text);

    // Integers mixed with floats read as a float column.
    if best_type == ColumnType::Integer && type_counts.contains_key(&ColumnType::Float) {
        return ColumnType::Float;
    }

    best_type
}

fn looks_like_date(value: &str) -> bool {
    DATE_PATTERNS.iter().any(|pattern| pattern.is_match(value))
}
