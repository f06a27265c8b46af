use serde::Serialize;
use serde_json::Value;

/// Tabular view of one worksheet: the first row of the fetched range becomes
/// the column headers, every following row becomes a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorksheetTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl WorksheetTable {
    /// Builds a table from the raw value grid of a worksheet. Returns `None`
    /// when the grid is empty so callers never store empty tables.
    pub fn from_values(values: Vec<Vec<Value>>) -> Option<Self> {
        let mut rows = values.into_iter();
        let columns = rows.next()?.iter().map(render_cell).collect();
        let rows = rows
            .map(|row| row.iter().map(render_cell).collect())
            .collect();

        Some(WorksheetTable { columns, rows })
    }

    /// Number of data rows, headers excluded.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_row_becomes_columns() {
        let table = WorksheetTable::from_values(vec![
            vec![json!("a"), json!("b")],
            vec![json!("1"), json!("2")],
            vec![json!("3"), json!("4")],
        ])
        .expect("non-empty grid should produce a table");

        assert_eq!(table.columns, vec!["a", "b"], "Headers should come from the first row");
        assert_eq!(
            table.rows,
            vec![vec!["1", "2"], vec!["3", "4"]],
            "Data rows should follow the header row"
        );
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_empty_grid_yields_no_table() {
        assert_eq!(WorksheetTable::from_values(vec![]), None);
    }

    #[test]
    fn test_header_only_grid_yields_empty_table() {
        let table = WorksheetTable::from_values(vec![vec![json!("a"), json!("b")]])
            .expect("header row alone is still a table");
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_non_string_cells_are_rendered() {
        let table = WorksheetTable::from_values(vec![
            vec![json!("count"), json!("ok")],
            vec![json!(42), json!(true)],
            vec![json!(null), json!("x")],
        ])
        .expect("grid should produce a table");

        assert_eq!(table.rows[0], vec!["42", "true"]);
        assert_eq!(table.rows[1], vec!["", "x"], "Null cells should render empty");
    }
}
