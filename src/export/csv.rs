//! CSV rendering of tables.

use crate::table::Table;
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

/// Errors raised while rendering a table to CSV bytes.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("csv write failed: {0}")]
    Write(#[from] csv::Error),

    #[error("csv flush failed: {0}")]
    Flush(#[from] std::io::Error),
}

/// Renders a table to CSV bytes.
///
/// Every field is quoted regardless of content, which protects embedded
/// delimiters, newlines, and leading zeros in code-like values. The header
/// row is emitted first from the table's current column order; no index
/// column is added. Output is UTF-8.
pub fn to_csv(table: &Table, delimiter: u8) -> Result<Vec<u8>, CsvError> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .quote_style(QuoteStyle::Always)
            .from_writer(&mut buffer);
        writer.write_record(table.labels())?;
        for row in 0..table.row_count() {
            writer.write_record(
                table
                    .columns()
                    .iter()
                    .map(|column| column.cells[row].to_string()),
            )?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}
