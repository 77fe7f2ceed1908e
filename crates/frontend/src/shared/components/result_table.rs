//! Rendering of schema-less tabular query results.
//!
//! Column order defines header and cell order; cell values are stringified
//! generically with no type-aware formatting.

use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use thaw::*;

/// Text for one cell: null or absent values render as an empty string,
/// strings render unquoted, everything else in its canonical JSON form.
pub fn cell_text(row: &HashMap<String, Value>, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Project result rows into display cells, one `Vec<String>` per row,
/// ordered by `columns`.
pub fn display_rows(columns: &[String], rows: &[HashMap<String, Value>]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| columns.iter().map(|column| cell_text(row, column)).collect())
        .collect()
}

#[component]
pub fn ResultTable(columns: Vec<String>, rows: Vec<HashMap<String, Value>>) -> impl IntoView {
    // Zero rows is a real outcome and gets its own placeholder, not an
    // empty table element.
    if rows.is_empty() {
        return view! { <p class="results__empty">"No results found."</p> }.into_any();
    }

    let body = display_rows(&columns, &rows);

    view! {
        <Table attr:class="results-table">
            <TableHeader>
                <TableRow>
                    {columns
                        .into_iter()
                        .map(|column| view! { <TableHeaderCell>{column}</TableHeaderCell> })
                        .collect_view()}
                </TableRow>
            </TableHeader>
            <TableBody>
                {body
                    .into_iter()
                    .map(|cells| view! {
                        <TableRow>
                            {cells
                                .into_iter()
                                .map(|cell| view! {
                                    <TableCell>
                                        <TableCellLayout>{cell}</TableCellLayout>
                                    </TableCell>
                                })
                                .collect_view()}
                        </TableRow>
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn cells_follow_column_order() {
        let columns = vec!["a".to_string(), "b".to_string()];
        let rows = vec![row(&[("a", json!(1)), ("b", Value::Null)])];
        assert_eq!(
            display_rows(&columns, &rows),
            vec![vec!["1".to_string(), String::new()]]
        );
    }

    #[test]
    fn strings_render_unquoted() {
        let one = row(&[("name", json!("Ada"))]);
        assert_eq!(cell_text(&one, "name"), "Ada");
    }

    #[test]
    fn missing_column_renders_empty() {
        let one = row(&[("a", json!(true))]);
        assert_eq!(cell_text(&one, "b"), "");
        assert_eq!(cell_text(&one, "a"), "true");
    }

    #[test]
    fn non_scalar_values_fall_back_to_json() {
        let one = row(&[("tags", json!(["x", "y"]))]);
        assert_eq!(cell_text(&one, "tags"), r#"["x","y"]"#);
    }

    #[test]
    fn empty_rows_produce_no_display_rows() {
        let columns = vec!["a".to_string()];
        assert!(display_rows(&columns, &[]).is_empty());
    }
}
