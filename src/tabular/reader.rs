//! Table readers for `.xlsx` and `.csv` files

use super::{unnamed_column, CellValue, Table, TableFormat};
use crate::domain::{Result, TableError};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Field values read as missing in CSV input
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read a table, choosing the reader from the file extension
///
/// Fails with [`TableError::UnsupportedFormat`] before touching the file when
/// the extension is neither `.xlsx` nor `.csv`.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let table = match TableFormat::from_path(path)? {
        TableFormat::Xlsx => read_xlsx(path)?,
        TableFormat::Csv => read_csv(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "Table loaded"
    );

    Ok(table)
}

/// Read the first worksheet of a workbook; its first row is the header
pub fn read_xlsx(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| TableError::ReadFailed(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TableError::EmptyWorkbook(path.display().to_string()))?
        .map_err(|e| TableError::ReadFailed(format!("{}: {}", path.display(), e)))?;

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(cells) => header_names(cells.iter().map(|c| match c {
            Data::Empty => String::new(),
            other => other.to_string(),
        })),
        None => return Ok(Table::default()),
    };

    let body = rows
        .map(|cells| cells.iter().map(cell_from_xlsx).collect())
        .collect();

    Ok(Table::new(header, body))
}

fn cell_from_xlsx(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
    }
}

/// Read a CSV file with a header row
pub fn read_csv(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| TableError::ReadFailed(format!("{}: {}", path.display(), e)))?;
    read_csv_from_reader(file)
}

/// Read CSV data with a header row from any reader
///
/// Column types are inferred from all of a column's values: a column is
/// integer, float or boolean only when every non-missing value parses as
/// such; otherwise every value stays text.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = header_names(
        csv_reader
            .headers()
            .map_err(|e| TableError::ReadFailed(e.to_string()))?
            .iter()
            .map(String::from),
    );

    let mut raw: Vec<Vec<String>> = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| TableError::ReadFailed(e.to_string()))?;
        raw.push(record.iter().map(String::from).collect());
    }

    let width = raw.iter().map(Vec::len).max().unwrap_or(0).max(header.len());
    let kinds: Vec<ColumnKind> = (0..width)
        .map(|col| {
            ColumnKind::infer(
                raw.iter()
                    .filter_map(|row| row.get(col))
                    .map(String::as_str),
            )
        })
        .collect();

    let rows = raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(col, field)| kinds[col].parse(field))
                .collect()
        })
        .collect();

    Ok(Table::new(header, rows))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

fn is_missing(field: &str) -> bool {
    NA_VALUES.contains(&field)
}

fn parse_bool(field: &str) -> Option<bool> {
    match field.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

impl ColumnKind {
    fn infer<'a>(fields: impl Iterator<Item = &'a str>) -> Self {
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;
        let mut any_value = false;

        for field in fields.filter(|f| !is_missing(f)) {
            any_value = true;
            let trimmed = field.trim();
            all_int &= trimmed.parse::<i64>().is_ok();
            all_float &= trimmed.parse::<f64>().is_ok();
            all_bool &= parse_bool(trimmed).is_some();
        }

        match (any_value, all_int, all_float, all_bool) {
            (false, ..) => Self::Text,
            (true, true, _, _) => Self::Int,
            (true, _, true, _) => Self::Float,
            (true, _, _, true) => Self::Bool,
            _ => Self::Text,
        }
    }

    fn parse(self, field: String) -> CellValue {
        if is_missing(&field) {
            return CellValue::Empty;
        }
        let trimmed = field.trim();
        match self {
            Self::Int => trimmed.parse().map(CellValue::Int).unwrap_or(CellValue::String(field)),
            Self::Float => trimmed.parse().map(CellValue::Float).unwrap_or(CellValue::String(field)),
            Self::Bool => parse_bool(trimmed).map(CellValue::Bool).unwrap_or(CellValue::String(field)),
            Self::Text => CellValue::String(field),
        }
    }
}

/// Normalize header cells: empty names become `Unnamed: <index>`, repeated
/// names get a `.1`, `.2`, ... suffix
fn header_names(raw: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::new();

    for (index, name) in raw.enumerate() {
        let base = if name.is_empty() { unnamed_column(index) } else { name };
        let count = seen.entry(base.clone()).or_insert(0);
        let unique = if *count == 0 {
            base.clone()
        } else {
            format!("{}.{}", base, count)
        };
        *count += 1;
        names.push(unique);
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MascaraError;

    fn csv(data: &str) -> Table {
        read_csv_from_reader(data.as_bytes()).unwrap()
    }

    #[test]
    fn test_csv_basic() {
        let table = csv("nome,idade\nMaria Silva,42\nJoão,30\n");
        assert_eq!(table.columns(), ["nome", "idade"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some(&CellValue::String("Maria Silva".into())));
        assert_eq!(table.cell(0, 1), Some(&CellValue::Int(42)));
    }

    #[test]
    fn test_csv_column_inference() {
        let table = csv("a,b,c,d\n1,1.5,TRUE,x\n,2,false,7\n");
        assert_eq!(table.cell(0, 0), Some(&CellValue::Int(1)));
        assert_eq!(table.cell(1, 0), Some(&CellValue::Empty));
        assert_eq!(table.cell(1, 1), Some(&CellValue::Float(2.0)));
        assert_eq!(table.cell(0, 2), Some(&CellValue::Bool(true)));
        assert_eq!(table.cell(1, 2), Some(&CellValue::Bool(false)));
        // mixed column stays text
        assert_eq!(table.cell(1, 3), Some(&CellValue::String("7".into())));
    }

    #[test]
    fn test_csv_quoted_fields() {
        let table = csv("obs\n\"Contato: joao@example.com, (11) 91234-5678\"\n");
        assert_eq!(
            table.cell(0, 0).and_then(CellValue::as_text),
            Some("Contato: joao@example.com, (11) 91234-5678")
        );
    }

    #[test]
    fn test_csv_na_values() {
        let table = csv("a\nNA\nnull\nAna\n");
        assert_eq!(table.cell(0, 0), Some(&CellValue::Empty));
        assert_eq!(table.cell(1, 0), Some(&CellValue::Empty));
        assert_eq!(table.cell(2, 0), Some(&CellValue::String("Ana".into())));
    }

    #[test]
    fn test_header_names() {
        let names = header_names(
            ["id", "", "id", "nome", "id"].into_iter().map(String::from),
        );
        assert_eq!(names, ["id", "Unnamed: 1", "id.1", "nome", "id.2"]);
    }

    #[test]
    fn test_read_table_rejects_unknown_extension() {
        let err = read_table("relatorio.pdf").unwrap_err();
        assert!(matches!(
            err,
            MascaraError::Table(TableError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let err = read_table("/nonexistent/dados.csv").unwrap_err();
        assert!(err.is_input_error());
    }
}
