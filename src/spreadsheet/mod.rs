//! # Workbook Reading Module
//!
//! Opens a spreadsheet workbook from raw bytes, enumerates its sheets, and
//! loads a single named sheet into a [`Table`]. Supports Excel files
//! (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`) and OpenDocument spreadsheets
//! (`.ods`) through a unified interface over the calamine readers.
//!
//! The input is a byte buffer rather than a path, so the format is detected
//! from content signatures: legacy Excel files start with the CFB magic,
//! everything else is a zip container whose entry names distinguish the
//! zip-based formats from each other.

pub mod cell;

use crate::spreadsheet::cell::CellValue;
use crate::table::{unnamed_label, Column, Table};
use calamine::{Data, Ods, OdsError, Range, Reader, Xls, XlsError, Xlsb, XlsbError, Xlsx, XlsxError};
use std::io::Cursor;
use thiserror::Error;
use zip::ZipArchive;

/// Magic number of Compound File Binary documents (legacy `.xls`).
const CFB_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Workbook part carried only by Excel Binary (`.xlsb`) containers.
const XLSB_WORKBOOK_PART: &str = "xl/workbook.bin";

/// Errors raised while opening a workbook or reading one of its sheets.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// Error in Excel 2007+ format (.xlsx, .xlsm)
    #[error("invalid xlsx workbook: {0}")]
    InvalidXlsx(#[from] XlsxError),

    /// Error in Excel Binary format (.xlsb)
    #[error("invalid xlsb workbook: {0}")]
    InvalidXlsb(#[from] XlsbError),

    /// Error in legacy Excel format (.xls)
    #[error("invalid xls workbook: {0}")]
    InvalidXls(#[from] XlsError),

    /// Error in OpenDocument format (.ods)
    #[error("invalid ods workbook: {0}")]
    InvalidOds(#[from] OdsError),

    /// Malformed container (unreadable zip archive)
    #[error("unreadable workbook container: {0}")]
    InvalidContainer(#[from] zip::result::ZipError),

    /// Bytes carry no recognized workbook signature
    #[error("unrecognized workbook format")]
    UnknownFormat,

    /// Requested sheet is absent from the workbook
    #[error("sheet '{name}' not found in workbook")]
    SheetNotFound { name: String },
}

/// Reader over a caller-owned byte buffer.
pub type ByteReader<'a> = Cursor<&'a [u8]>;

/// Wrapper enum for the format-specific workbook readers.
///
/// Provides a unified interface over the spreadsheet formats supported by
/// calamine, abstracting away the differences between them.
pub enum Spreadsheet<'a> {
    /// Excel 2007+ format reader (.xlsx, .xlsm)
    Xlsx(Xlsx<ByteReader<'a>>),
    /// Excel Binary format reader (.xlsb)
    Xlsb(Xlsb<ByteReader<'a>>),
    /// Legacy Excel format reader (.xls)
    Xls(Xls<ByteReader<'a>>),
    /// OpenDocument format reader (.ods)
    Ods(Ods<ByteReader<'a>>),
}

impl<'a> Spreadsheet<'a> {
    /// Opens a workbook from raw bytes.
    ///
    /// The format is detected from the content: the CFB magic marks a
    /// legacy `.xls` document; a zip container is classified by its entry
    /// names (`xl/workbook.bin` for `.xlsb`, `[Content_Types].xml` for
    /// `.xlsx`/`.xlsm`, `mimetype`/`content.xml` for `.ods`).
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes carry no recognized signature, the
    /// container is unreadable, or the format-specific reader rejects the
    /// workbook structure.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, SpreadsheetError> {
        if bytes.starts_with(&CFB_MAGIC) {
            log::debug!("opening cfb container as xls");
            return Ok(Self::Xls(Xls::new(Cursor::new(bytes))?));
        }
        if !bytes.starts_with(b"PK") {
            return Err(SpreadsheetError::UnknownFormat);
        }

        let entries: Vec<String> = ZipArchive::new(Cursor::new(bytes))?
            .file_names()
            .map(str::to_owned)
            .collect();
        // Entry name comparison is case-insensitive, as some producers vary
        // the casing of the content types part.
        if entries.iter().any(|name| name.eq_ignore_ascii_case(XLSB_WORKBOOK_PART)) {
            log::debug!("opening zip container as xlsb");
            Ok(Self::Xlsb(Xlsb::new(Cursor::new(bytes))?))
        } else if entries.iter().any(|name| name.eq_ignore_ascii_case("[Content_Types].xml")) {
            log::debug!("opening zip container as xlsx");
            Ok(Self::Xlsx(Xlsx::new(Cursor::new(bytes))?))
        } else if entries.iter().any(|name| name == "mimetype" || name == "content.xml") {
            log::debug!("opening zip container as ods");
            Ok(Self::Ods(Ods::new(Cursor::new(bytes))?))
        } else {
            Err(SpreadsheetError::UnknownFormat)
        }
    }

    /// Returns the names of all sheets in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Self::Xlsx(xlsx) => xlsx.sheet_names(),
            Self::Xlsb(xlsb) => xlsb.sheet_names(),
            Self::Xls(xls) => xls.sheet_names(),
            Self::Ods(ods) => ods.sheet_names(),
        }
    }

    /// Loads one named sheet into a [`Table`].
    ///
    /// The first row of the sheet's used range is the header; header cells
    /// without content yield synthesized `Unnamed: <index>` labels. When
    /// `max_rows` is given only that many data rows are returned, the
    /// header excluded from the count.
    ///
    /// # Errors
    ///
    /// Returns [`SpreadsheetError::SheetNotFound`] if no sheet has the
    /// given name, or a format error if the sheet data cannot be read.
    pub fn read_table(
        &mut self,
        sheet: &str,
        max_rows: Option<usize>,
    ) -> Result<Table, SpreadsheetError> {
        if !self.sheet_names().iter().any(|name| name == sheet) {
            return Err(SpreadsheetError::SheetNotFound {
                name: sheet.to_owned(),
            });
        }
        let range = match self {
            Self::Xlsx(xlsx) => xlsx.worksheet_range(sheet)?,
            Self::Xlsb(xlsb) => xlsb.worksheet_range(sheet)?,
            Self::Xls(xls) => xls.worksheet_range(sheet)?,
            Self::Ods(ods) => ods.worksheet_range(sheet)?,
        };
        let table = table_from_range(&range, max_rows);
        log::debug!(
            "read sheet '{}': {} columns, {} rows",
            sheet,
            table.column_count(),
            table.row_count()
        );
        Ok(table)
    }
}

/// Converts a worksheet range into a [`Table`].
///
/// The range's first row provides the column labels; remaining rows become
/// the data, capped at `max_rows` when given.
fn table_from_range(range: &Range<Data>, max_rows: Option<usize>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::default();
    };

    let labels: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(index, data)| {
            let value = CellValue::from(data);
            if value.is_empty() {
                unnamed_label(index)
            } else {
                value.to_string()
            }
        })
        .collect();

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); labels.len()];
    let limit = max_rows.unwrap_or(usize::MAX);
    for row in rows.take(limit) {
        for (column, data) in cells.iter_mut().zip(row) {
            column.push(CellValue::from(data));
        }
    }

    Table::new(
        labels
            .into_iter()
            .zip(cells)
            .map(|(label, cells)| Column::new(label, cells))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            Spreadsheet::from_bytes(b"not a workbook"),
            Err(SpreadsheetError::UnknownFormat)
        ));
    }

    #[test]
    fn empty_range_yields_empty_table() {
        let range: Range<Data> = Range::empty();
        assert!(table_from_range(&range, None).is_empty());
    }

    #[test]
    fn header_and_rows_split() {
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("Item".to_owned()));
        range.set_value((0, 1), Data::String("Qty".to_owned()));
        range.set_value((1, 0), Data::String("widget".to_owned()));
        range.set_value((1, 1), Data::Float(2.0));
        range.set_value((2, 0), Data::String("gadget".to_owned()));
        range.set_value((2, 1), Data::Float(3.0));

        let table = table_from_range(&range, None);
        assert_eq!(table.labels().collect::<Vec<_>>(), vec!["Item", "Qty"]);
        assert_eq!(table.row_count(), 2);

        let preview = table_from_range(&range, Some(1));
        assert_eq!(preview.row_count(), 1);
    }

    #[test]
    fn blank_header_cells_get_synthesized_labels() {
        let mut range = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("Code".to_owned()));
        range.set_value((1, 0), Data::String("X1".to_owned()));
        range.set_value((1, 1), Data::String("stray".to_owned()));

        let table = table_from_range(&range, None);
        assert_eq!(
            table.labels().collect::<Vec<_>>(),
            vec!["Code", "Unnamed: 1"]
        );
    }
}
