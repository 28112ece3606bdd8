//! # Conversion Orchestrator
//!
//! Drives the per-sheet pipeline: read, empty check, optional numeric
//! filter, conditional unnamed-column removal, CSV serialization. The
//! orchestrator owns the only cross-sheet state of a conversion, the
//! append-only log and the ordered result map; every other stage is a pure
//! function of its inputs. One sheet's failure never aborts the batch.

use crate::error::Error;
use crate::export::csv::to_csv;
use crate::spreadsheet::Spreadsheet;
use crate::table::filter::{apply_filter, FilterOutcome};
use crate::table::sanitize::strip_unnamed_columns;
use anyhow::Context;
use std::collections::HashSet;

/// One selected sheet with its optional filter specification.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Name of the worksheet to convert
    pub sheet: String,
    /// Column label or 0-based index to filter numerically, if any
    pub filter: Option<String>,
}

impl Selection {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            filter: None,
        }
    }

    pub fn with_filter(sheet: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            filter: Some(filter.into()),
        }
    }
}

/// Caller-supplied conversion settings.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// CSV field delimiter
    pub delimiter: u8,
    /// Sheets that get header-less columns removed in addition to the
    /// built-in name match
    pub pos_sheets: HashSet<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            pos_sheets: HashSet::new(),
        }
    }
}

/// Result of one conversion run: generated files and the processing log.
#[derive(Debug, Default)]
pub struct Conversion {
    /// Output filename to CSV bytes, in processing order
    pub files: Vec<(String, Vec<u8>)>,
    /// Human-readable log lines, one or more per sheet, in processing order
    pub log: Vec<String>,
}

/// Converts the selected sheets of a workbook into CSV buffers.
///
/// The workbook is opened once; failure to open it is the only
/// operation-level error. Each selection is then processed independently in
/// the given order, and per-sheet failures are logged and skipped. The log
/// records every condition, success or not; the caller is responsible for
/// displaying it.
pub fn convert(
    bytes: &[u8],
    selections: &[Selection],
    options: &ConvertOptions,
) -> Result<Conversion, Error> {
    let mut spreadsheet = Spreadsheet::from_bytes(bytes)?;
    let mut conversion = Conversion::default();

    if selections.is_empty() {
        conversion.log.push("Error: No sheets selected".to_owned());
        return Ok(conversion);
    }

    for selection in selections {
        match process_sheet(&mut spreadsheet, selection, options, &mut conversion.log) {
            Ok(Some(csv)) => {
                conversion.files.push((format!("{}.csv", selection.sheet), csv));
                conversion.log.push(format!(
                    "Successfully generated CSV for sheet '{}'",
                    selection.sheet
                ));
            }
            Ok(None) => (), // skipped, already logged
            Err(error) => {
                log::warn!("sheet '{}' failed: {:#}", selection.sheet, error);
                conversion.log.push(format!(
                    "Error processing sheet '{}': {:#}",
                    selection.sheet, error
                ));
            }
        }
    }

    if !conversion.files.is_empty() {
        conversion.log.push(format!(
            "Total: {} CSV file(s) generated",
            conversion.files.len()
        ));
    }
    Ok(conversion)
}

/// Runs the pipeline for one sheet.
///
/// Returns the CSV bytes, or `None` when the sheet was skipped after an
/// already-logged condition (empty before or after filtering).
fn process_sheet(
    spreadsheet: &mut Spreadsheet,
    selection: &Selection,
    options: &ConvertOptions,
    log: &mut Vec<String>,
) -> anyhow::Result<Option<Vec<u8>>> {
    let sheet = selection.sheet.as_str();

    let mut table = spreadsheet.read_table(sheet, None)?;
    if table.is_empty() {
        log.push(format!("The sheet '{sheet}' appears to be empty."));
        return Ok(None);
    }

    let filter = selection
        .filter
        .as_deref()
        .map(str::trim)
        .filter(|spec| !spec.is_empty());
    if let Some(spec) = filter {
        match apply_filter(&table, spec) {
            FilterOutcome::Applied {
                table: filtered,
                column,
                rows_dropped,
            } => {
                table = filtered;
                log.push(format!(
                    "Applied filter on column '{column}' for sheet '{sheet}': {rows_dropped} row(s) dropped"
                ));
            }
            FilterOutcome::ColumnNotFound => {
                log.push(format!(
                    "Warning: Filter column '{spec}' not found in sheet '{sheet}'. No filtering applied."
                ));
            }
        }
    }
    if table.is_empty() {
        log.push(format!("The sheet '{sheet}' is empty after applying filters."));
        return Ok(None);
    }

    let (table, removed) = strip_unnamed_columns(&table, sheet, &options.pos_sheets);
    if removed > 0 {
        log.push(format!("Removed {removed} unnamed columns from '{sheet}'"));
    }

    let csv = to_csv(&table, options.delimiter).context("csv serialization failed")?;
    Ok(Some(csv))
}
