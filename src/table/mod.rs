//! In-memory tabular data extracted from one worksheet.
//!
//! A [`Table`] is an ordered sequence of labeled columns of equal length.
//! Tables are immutable once produced by the reader; the filter and
//! sanitizer stages return new tables instead of mutating in place.

pub mod filter;
pub mod sanitize;

use crate::spreadsheet::cell::CellValue;

/// Label prefix synthesized by the reader for columns without a header cell.
pub(crate) const UNNAMED_LABEL_PREFIX: &str = "Unnamed:";

/// Builds the placeholder label for a header-less column at the given
/// 0-based position.
pub(crate) fn unnamed_label(index: usize) -> String {
    format!("{UNNAMED_LABEL_PREFIX} {index}")
}

/// Returns true if a label was synthesized for a header-less column.
pub(crate) fn is_unnamed_label(label: &str) -> bool {
    label.starts_with(UNNAMED_LABEL_PREFIX)
}

/// A labeled column of cell values.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column label (from the header row or generated)
    pub label: String,
    /// Cell values in row order
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(label: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            label: label.into(),
            cells,
        }
    }
}

/// An ordered collection of equal-length columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table from columns. All columns must have the same length.
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|pair| pair[0].cells.len() == pair[1].cells.len()),
            "columns must have equal length"
        );
        Self { columns }
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True if the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column labels in table order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.label.as_str())
    }

    /// Position of the first column with the given label.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.label == label)
    }
}
