//! Spreadsheet tables
//!
//! A [`Table`] is the in-memory form of an uploaded spreadsheet: a header row
//! and rows of typed [`CellValue`]s. Readers and the writer convert between
//! this model and `.xlsx` / `.csv` files; the engine maps it cell by cell.

pub mod preview;
pub mod reader;
pub mod writer;

use crate::domain::{Result, TableError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub use reader::read_table;
pub use writer::{to_xlsx_bytes, write_xlsx};

/// Default name of the anonymized workbook
pub const OUTPUT_FILE_NAME: &str = "planilha_anonimizada.xlsx";

/// Content type of the anonymized workbook, for callers serving it
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Supported input formats, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Xlsx,
    Csv,
}

impl TableFormat {
    /// Determine the format from the file extension (case-insensitive)
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("xlsx") => Ok(Self::Xlsx),
            Some("csv") => Ok(Self::Csv),
            _ => Err(TableError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// A single spreadsheet cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Spreadsheet serial date (days since 1899-12-30)
    DateTime(f64),
}

impl CellValue {
    /// Text content, if this is a string cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
            Self::DateTime(serial) => match serial_to_datetime(*serial) {
                Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
                None => write!(f, "{}", serial),
            },
        }
    }
}

/// Convert a spreadsheet serial date to a calendar timestamp
fn serial_to_datetime(serial: f64) -> Option<chrono::NaiveDateTime> {
    let epoch = chrono::NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round();
    // beyond year 30000 either way
    if !millis.is_finite() || millis.abs() > 1e15 {
        return None;
    }
    epoch.checked_add_signed(chrono::Duration::milliseconds(millis as i64))
}

/// Header plus rows of cells
///
/// Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table, padding short rows with empty cells
    ///
    /// Rows wider than the header get extra `Unnamed: <index>` columns.
    pub fn new(mut columns: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(columns.len());

        for index in columns.len()..width {
            columns.push(unnamed_column(index));
        }
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at a row and column position
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Replace all rows, keeping the header
    pub fn with_rows(&self, rows: Vec<Vec<CellValue>>) -> Self {
        Self::new(self.columns.clone(), rows)
    }
}

/// Name given to a column with an empty header cell
pub fn unnamed_column(index: usize) -> String {
    format!("Unnamed: {}", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MascaraError;

    #[test]
    fn test_format_from_path() {
        assert_eq!(TableFormat::from_path("dados.xlsx").unwrap(), TableFormat::Xlsx);
        assert_eq!(TableFormat::from_path("dados.CSV").unwrap(), TableFormat::Csv);
    }

    #[test]
    fn test_unsupported_format() {
        let err = TableFormat::from_path("dados.pdf").unwrap_err();
        assert!(matches!(
            err,
            MascaraError::Table(TableError::UnsupportedFormat(_))
        ));
        assert!(err.to_string().contains("Please upload a .xlsx or .csv file"));

        assert!(TableFormat::from_path("sem_extensao").is_err());
        assert!(TableFormat::from_path("planilha.xls").is_err());
    }

    #[test]
    fn test_table_pads_rows() {
        let table = Table::new(
            vec!["a".to_string(), String::new()],
            vec![
                vec![CellValue::Int(1)],
                vec![
                    CellValue::Int(2),
                    CellValue::Int(3),
                    CellValue::Bool(true),
                ],
            ],
        );
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.columns()[2], "Unnamed: 2");
        assert_eq!(table.cell(0, 1), Some(&CellValue::Empty));
        assert_eq!(table.cell(1, 2), Some(&CellValue::Bool(true)));
        assert_eq!(table.cell_count(), 6);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(CellValue::String("Ana".into()).to_string(), "Ana");
        // 2024-01-01 12:00
        assert_eq!(CellValue::DateTime(45292.5).to_string(), "2024-01-01 12:00:00");
    }

    #[test]
    fn test_as_text() {
        assert_eq!(CellValue::String("x".into()).as_text(), Some("x"));
        assert_eq!(CellValue::Int(42).as_text(), None);
    }
}
