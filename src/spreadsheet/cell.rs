use calamine::{Data, ExcelDateTime};
use chrono::NaiveDateTime;
use std::fmt::Display;

/// A single cell value extracted from a worksheet.
///
/// Values are untyped at this level: the reader keeps whatever the workbook
/// stored (numbers, strings, booleans, blanks). Date and time cells are
/// rendered to text at read time so that later stages only deal with these
/// five shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Cell without content
    Empty,
    /// Boolean values (true/false)
    Bool(bool),
    /// 64-bit signed integers
    Int(i64),
    /// Double precision floating point numbers
    Float(f64),
    /// Everything carried as text, including rendered dates and errors
    Text(String),
}

impl CellValue {
    /// Returns true if the cell contains no data.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for CellValue {
    /// Converts a calamine cell into a `CellValue`.
    ///
    /// Date/time cells become text in ISO order; spreadsheet error cells
    /// keep their display form (`#DIV/0!`, `#N/A`, ...) the way a tabular
    /// reader surfaces them.
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            Data::Bool(value) => Self::Bool(*value),
            Data::Int(value) => Self::Int(*value),
            Data::Float(value) => Self::Float(*value),
            Data::String(value) => Self::Text(value.to_owned()),
            Data::DateTime(value) => Self::Text(render_datetime(value)),
            Data::DateTimeIso(value) => Self::Text(value.to_owned()),
            Data::DurationIso(value) => Self::Text(value.to_owned()),
            Data::Error(error) => Self::Text(error.to_string()),
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Renders an Excel serial date/time to text.
///
/// A serial with no fractional part carries no time component and renders as
/// a date; a serial within the first day carries no date component and
/// renders as a time; everything else renders as a full timestamp.
fn render_datetime(value: &ExcelDateTime) -> String {
    let serial = value.as_f64();
    match value.as_datetime() {
        Some(datetime) if serial.fract() == 0.0 => format_date(datetime),
        Some(datetime) if serial <= 1.0 => datetime.format("%H:%M:%S").to_string(),
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial.to_string(),
    }
}

fn format_date(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d").to_string()
}
