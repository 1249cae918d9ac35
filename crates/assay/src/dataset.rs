//! Read-only dataset abstraction.
//!
//! Analysis components never touch a concrete table type. They operate
//! through [`Dataset`], which exposes column enumeration, per-column
//! declared types, raw cell access, null checks, and numeric coercion.
//! Any tabular structure (array-of-structs, columnar store, a thin CSV
//! loader) can implement it; the built-in implementation is
//! [`DataTable`](crate::input::DataTable).

use crate::dtype::ColumnType;

/// A read-only handle to tabular data: rows by named columns, nullable
/// cells, a declared element type per column.
pub trait Dataset {
    /// Column names, in table order.
    fn column_names(&self) -> &[String];

    /// Number of data rows.
    fn row_count(&self) -> usize;

    /// Declared element type of the column at `index`.
    fn dtype(&self, index: usize) -> ColumnType;

    /// Raw text of a cell. Ragged rows read as empty cells.
    fn raw_value(&self, row: usize, index: usize) -> &str;

    /// Whether the cell at (`row`, `index`) is null/missing.
    fn is_null(&self, row: usize, index: usize) -> bool;

    /// Number of columns.
    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    /// Position of a column by name.
    fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names().iter().position(|h| h == name)
    }

    /// Numeric reading of a cell: `None` when the cell is null or the
    /// text does not coerce to a number.
    fn numeric_value(&self, row: usize, index: usize) -> Option<f64> {
        if self.is_null(row, index) {
            return None;
        }
        self.raw_value(row, index).trim().parse().ok()
    }
}
