//! Numeric row filtering on a single column.

use crate::spreadsheet::cell::CellValue;
use crate::table::{Column, Table};

/// Result of applying a filter specification to a table.
#[derive(Debug)]
pub enum FilterOutcome {
    /// The column was resolved; rows without a numeric value there were
    /// dropped and the column now carries the coerced numbers.
    Applied {
        table: Table,
        /// Label of the resolved column
        column: String,
        rows_dropped: usize,
    },
    /// The specification resolved to no column. The caller keeps the table
    /// unchanged; this is a condition to log, not a failure.
    ColumnNotFound,
}

/// Applies a filter specification to a table.
///
/// The specification selects one column, by label or by 0-based position
/// when it is composed entirely of digits. A positional specification whose
/// index is out of range falls back to a literal label lookup. Cells of the
/// resolved column are coerced to numbers (comma decimal separators are
/// normalized to dots first); rows whose cell fails the coercion are
/// dropped, survivors keep their order, and the column's cells are replaced
/// by the coerced values.
pub fn apply_filter(table: &Table, spec: &str) -> FilterOutcome {
    let Some(position) = resolve_column(table, spec) else {
        return FilterOutcome::ColumnNotFound;
    };

    let target = &table.columns()[position];
    let coerced: Vec<Option<f64>> = target.cells.iter().map(coerce_numeric).collect();

    let columns = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let cells = if index == position {
                coerced.iter().copied().flatten().map(CellValue::Float).collect()
            } else {
                column
                    .cells
                    .iter()
                    .zip(&coerced)
                    .filter(|(_, value)| value.is_some())
                    .map(|(cell, _)| cell.to_owned())
                    .collect()
            };
            Column::new(column.label.to_owned(), cells)
        })
        .collect();

    let rows_dropped = coerced.iter().filter(|value| value.is_none()).count();
    FilterOutcome::Applied {
        table: Table::new(columns),
        column: target.label.to_owned(),
        rows_dropped,
    }
}

/// Resolves a filter specification to a column position.
///
/// An all-digits specification is a 0-based index into the current column
/// order; when the index is out of range the trimmed text is retried as a
/// literal label, so a column literally named "7" stays reachable.
fn resolve_column(table: &Table, spec: &str) -> Option<usize> {
    let trimmed = spec.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|character| character.is_ascii_digit()) {
        if let Ok(index) = trimmed.parse::<usize>() {
            if index < table.column_count() {
                return Some(index);
            }
        }
    }
    table.position_of(trimmed)
}

/// Coerces a cell to a number, mirroring a lenient numeric cast: text is
/// parsed after comma-to-dot normalization, booleans count as 1/0, and a
/// parse that yields NaN counts as failed.
fn coerce_numeric(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Int(value) => Some(*value as f64),
        CellValue::Float(value) => Some(*value).filter(|value| !value.is_nan()),
        CellValue::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
        CellValue::Text(text) => text
            .replace(',', ".")
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| !value.is_nan()),
        CellValue::Empty => None,
    }
}
