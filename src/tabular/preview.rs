//! Console preview of a table

use super::Table;

/// Longest cell text shown before truncation
const MAX_CELL_WIDTH: usize = 40;

fn clip(text: &str) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= MAX_CELL_WIDTH {
        single_line
    } else {
        let mut clipped: String = single_line.chars().take(MAX_CELL_WIDTH - 1).collect();
        clipped.push('…');
        clipped
    }
}

/// Render the header and the first `max_rows` rows as an aligned text grid
///
/// A leading column shows the row position, starting at 0.
pub fn render_preview(table: &Table, max_rows: usize) -> String {
    let shown = table.row_count().min(max_rows);

    let mut grid: Vec<Vec<String>> = Vec::with_capacity(shown + 1);
    let mut header = vec![String::new()];
    header.extend(table.columns().iter().map(|c| clip(c)));
    grid.push(header);

    for (index, row) in table.rows().iter().take(shown).enumerate() {
        let mut line = vec![index.to_string()];
        line.extend(row.iter().map(|cell| clip(&cell.to_string())));
        grid.push(line);
    }

    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            grid.iter()
                .filter_map(|line| line.get(col))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    for line in &grid {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        output.push_str(cells.join("  ").trim_end());
        output.push('\n');
    }

    if table.row_count() > shown {
        output.push_str(&format!(
            "... {} more rows ({} total)\n",
            table.row_count() - shown,
            table.row_count()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::CellValue;

    fn table(rows: usize) -> Table {
        Table::new(
            vec!["nome".to_string(), "idade".to_string()],
            (0..rows)
                .map(|i| vec![CellValue::String("********".into()), CellValue::Int(i as i64)])
                .collect(),
        )
    }

    #[test]
    fn test_render_preview() {
        let output = render_preview(&table(2), 10);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   nome      idade");
        assert_eq!(lines[1], "0  ********  0");
    }

    #[test]
    fn test_render_preview_truncates_rows() {
        let output = render_preview(&table(5), 2);
        assert_eq!(output.lines().count(), 4);
        assert!(output.ends_with("... 3 more rows (5 total)\n"));
    }

    #[test]
    fn test_clip_long_cell() {
        let long = "a".repeat(100);
        assert_eq!(clip(&long).chars().count(), MAX_CELL_WIDTH);
        assert_eq!(clip("linha\nnova"), "linha nova");
    }
}
