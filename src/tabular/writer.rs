//! `.xlsx` table writer
//!
//! Single worksheet, bold header row, no index column.

use super::{CellValue, Table};
use crate::domain::{Result, TableError};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use std::path::Path;

/// Spreadsheet row limit, header included
const MAX_ROWS: usize = 1_048_576;
/// Spreadsheet column limit
const MAX_COLUMNS: usize = 16_384;

fn write_error(err: XlsxError) -> TableError {
    TableError::WriteFailed(err.to_string())
}

fn build_workbook(table: &Table) -> Result<Workbook> {
    if table.row_count() + 1 > MAX_ROWS {
        return Err(TableError::TooLarge(format!("{} rows", table.row_count())).into());
    }
    if table.column_count() > MAX_COLUMNS {
        return Err(TableError::TooLarge(format!("{} columns", table.column_count())).into());
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    let worksheet = workbook.add_worksheet();

    // limits checked above
    for (col, name) in table.columns().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(write_error)?;
    }

    for (index, row) in table.rows().iter().enumerate() {
        let r = (index + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                CellValue::Empty => {}
                CellValue::String(s) => {
                    worksheet.write_string(r, c, s).map_err(write_error)?;
                }
                CellValue::Int(i) => {
                    worksheet.write_number(r, c, *i as f64).map_err(write_error)?;
                }
                CellValue::Float(x) if x.is_finite() => {
                    worksheet.write_number(r, c, *x).map_err(write_error)?;
                }
                CellValue::Float(x) => {
                    worksheet.write_string(r, c, x.to_string()).map_err(write_error)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(r, c, *b).map_err(write_error)?;
                }
                CellValue::DateTime(serial) => {
                    worksheet
                        .write_number_with_format(r, c, *serial, &date_format)
                        .map_err(write_error)?;
                }
            }
        }
    }

    Ok(workbook)
}

/// Write a table to an `.xlsx` file
pub fn write_xlsx(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook(table)?;
    workbook
        .save(path)
        .map_err(|e| TableError::WriteFailed(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        "Workbook written"
    );

    Ok(())
}

/// Serialize a table to `.xlsx` bytes, e.g. for a download response
pub fn to_xlsx_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(table)?;
    Ok(workbook.save_to_buffer().map_err(write_error)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::reader::read_xlsx;

    fn sample() -> Table {
        Table::new(
            vec!["nome".to_string(), "idade".to_string(), "ativo".to_string()],
            vec![
                vec![
                    CellValue::String("********".into()),
                    CellValue::Int(42),
                    CellValue::Bool(true),
                ],
                vec![CellValue::Empty, CellValue::Float(1.5), CellValue::Bool(false)],
            ],
        )
    }

    #[test]
    fn test_to_bytes_is_zip() {
        let bytes = to_xlsx_bytes(&sample()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saida.xlsx");
        write_xlsx(&sample(), &path).unwrap();

        let table = read_xlsx(&path).unwrap();
        assert_eq!(table.columns(), ["nome", "idade", "ativo"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0).and_then(CellValue::as_text), Some("********"));
        assert_eq!(table.cell(0, 2), Some(&CellValue::Bool(true)));
        assert_eq!(table.cell(1, 0), Some(&CellValue::Empty));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = write_xlsx(&sample(), "/nonexistent/dir/out.xlsx").unwrap_err();
        assert!(err.to_string().contains("Failed to write table"));
    }
}
