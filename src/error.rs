use thiserror::Error;

/// Main error type of the crate.
/// Aggregates the per-module errors behind the public API surface.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Spreadsheet(#[from] crate::spreadsheet::SpreadsheetError),

    #[error("{0}")]
    Csv(#[from] crate::export::csv::CsvError),

    #[error("{0}")]
    Archive(#[from] crate::export::archive::ArchiveError),
}
