//! # Workbook to CSV Conversion
//!
//! Converts selected worksheets of a spreadsheet workbook into CSV byte
//! buffers and packages them into a zip archive. The workbook arrives as
//! raw bytes (an upload, typically); the results are named byte buffers
//! ready to be offered as downloads. Presentation concerns stay with the
//! caller.
//!
//! ## Features
//!
//! - **Multi-format support**: Excel files (`.xlsx`, `.xlsm`, `.xlsb`,
//!   `.xls`) and OpenDocument spreadsheets (`.ods`), detected from content
//! - **Per-sheet numeric filtering**: keep only rows with a parseable
//!   number in a chosen column, addressed by label or 0-based index,
//!   accepting comma or dot decimal separators
//! - **Header-less column removal**: point-of-sale style sheets are
//!   stripped of columns that had no header cell
//! - **Quote-all CSV output**: every field quoted, UTF-8, configurable
//!   delimiter, no index column
//! - **Per-sheet fault isolation**: one sheet's failure is logged and
//!   skipped, never aborting the batch
//!
//! ## Operations
//!
//! - [`list_sheets`]: enumerate the sheet names of a workbook
//! - [`preview_sheet`]: load one sheet, optionally capped to N data rows
//! - [`convert`]: run the conversion pipeline over selected sheets
//! - [`archive`]: bundle generated files into a deflate-compressed zip

mod convert;
mod error;
mod export;
mod spreadsheet;
mod table;

pub use crate::convert::{Conversion, ConvertOptions, Selection};
pub use crate::error::Error;
pub use crate::export::archive::{pack, ArchiveError};
pub use crate::export::csv::{to_csv, CsvError};
pub use crate::spreadsheet::cell::CellValue;
pub use crate::spreadsheet::{Spreadsheet, SpreadsheetError};
pub use crate::table::filter::{apply_filter, FilterOutcome};
pub use crate::table::sanitize::strip_unnamed_columns;
pub use crate::table::{Column, Table};

/// Returns the sheet names of a workbook, in workbook order.
///
/// # Errors
///
/// Fails if the bytes are not a parseable spreadsheet container.
pub fn list_sheets(bytes: &[u8]) -> Result<Vec<String>, Error> {
    Ok(Spreadsheet::from_bytes(bytes)?.sheet_names())
}

/// Loads a single sheet into a [`Table`], optionally capped to the first
/// `max_rows` data rows (the header row is not counted).
///
/// Reading is idempotent and side-effect-free; callers that preview
/// repeatedly may cache on their side.
///
/// # Errors
///
/// Fails if the workbook is unreadable or the sheet is absent.
pub fn preview_sheet(
    bytes: &[u8],
    sheet: &str,
    max_rows: Option<usize>,
) -> Result<Table, Error> {
    Ok(Spreadsheet::from_bytes(bytes)?.read_table(sheet, max_rows)?)
}

/// Converts the selected sheets of a workbook into CSV buffers, returning
/// the generated files and the processing log.
///
/// # Errors
///
/// Fails only if the workbook cannot be opened at all; per-sheet failures
/// are logged in the returned [`Conversion`] instead.
pub fn convert(
    bytes: &[u8],
    selections: &[Selection],
    options: &ConvertOptions,
) -> Result<Conversion, Error> {
    crate::convert::convert(bytes, selections, options)
}

/// Bundles named byte buffers into a single deflate-compressed zip archive,
/// entries in input order.
///
/// # Errors
///
/// Fails on an underlying archive write failure.
pub fn archive(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>, Error> {
    Ok(pack(files)?)
}
