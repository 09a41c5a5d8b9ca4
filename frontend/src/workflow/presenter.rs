//! Display model for anonymized CSV results.

use common::responses::ResultRow;
use num_format::{Locale, ToFormattedString};
use serde_json::Value;

/// A result row plus the synthetic key the grid needs. The key is assigned
/// here and is not part of the service contract.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedRow {
    pub id: usize,
    pub cells: ResultRow,
}

/// Rows and column definitions ready for the result grid. An empty table is a
/// valid "no rows" result, distinct from a failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TablePresentation {
    pub columns: Vec<String>,
    pub rows: Vec<PresentedRow>,
}

impl TablePresentation {
    /// Numbers rows `0..n` in arrival order. Columns come from the first row's
    /// keys; later rows are assumed to share them.
    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(id, cells)| PresentedRow { id, cells })
            .collect();
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text for one cell; missing keys and `null` render as empty.
    pub fn cell_text(row: &PresentedRow, column: &str) -> String {
        match row.cells.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn row_count_label(&self) -> String {
        match self.rows.len() {
            1 => "1 row".to_string(),
            n => format!("{} rows", n.to_formatted_string(&Locale::en)),
        }
    }

    /// Serializes the presented table back to CSV, header first.
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(
                self.columns
                    .iter()
                    .map(|column| Self::cell_text(row, column)),
            )?;
        }
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> Vec<ResultRow> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn rows_get_sequential_ids_and_first_row_columns() {
        let table = TablePresentation::from_rows(rows(json!([
            { "id": "a1f3", "dob": "1990-01-01", "salary": "50000-60000" },
            { "id": "9bc2", "dob": "1985-06-01", "salary": "40000-50000" },
            { "id": "77de", "dob": "1979-03-01", "salary": "50000-60000" }
        ])));

        let ids: Vec<usize> = table.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(table.columns, ["id", "dob", "salary"]);
        assert_eq!(table.row_count_label(), "3 rows");
    }

    #[test]
    fn service_id_column_is_kept_apart_from_the_row_key() {
        let table = TablePresentation::from_rows(rows(json!([{ "id": "x" }])));
        assert_eq!(table.rows[0].id, 0);
        assert_eq!(TablePresentation::cell_text(&table.rows[0], "id"), "x");
    }

    #[test]
    fn empty_result_is_a_displayable_table() {
        let table = TablePresentation::from_rows(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
        assert_eq!(table.row_count_label(), "0 rows");
    }

    #[test]
    fn cells_render_non_string_values() {
        let table = TablePresentation::from_rows(rows(json!([
            { "age": 42, "score": 0.5, "note": null }
        ])));
        let row = &table.rows[0];
        assert_eq!(TablePresentation::cell_text(row, "age"), "42");
        assert_eq!(TablePresentation::cell_text(row, "score"), "0.5");
        assert_eq!(TablePresentation::cell_text(row, "note"), "");
        assert_eq!(TablePresentation::cell_text(row, "missing"), "");
    }

    #[test]
    fn large_counts_are_grouped() {
        let many = (0..1234).map(|_| ResultRow::new()).collect();
        assert_eq!(TablePresentation::from_rows(many).row_count_label(), "1,234 rows");
    }

    #[test]
    fn export_quotes_fields_that_need_it() {
        let table = TablePresentation::from_rows(rows(json!([
            { "name": "J*****", "city": "Paris, FR" }
        ])));
        assert_eq!(table.to_csv().unwrap(), "name,city\nJ*****,\"Paris, FR\"\n");
    }
}
