//! Output rendering for listings and overviews.

use std::io::Write;

use askama::Template;
use clap::ValueEnum;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use storedash_admin::components::TableView;

/// How a listing is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    Table,
    /// The visible rows as canonical JSON records
    Json,
    /// Standalone HTML table
    Html,
}

/// HTML rendering of a table view.
#[derive(Template)]
#[template(path = "table.html")]
struct TableHtml<'a> {
    view: &'a TableView,
}

/// Render a table view for the terminal.
///
/// An empty view prints its empty-state message instead.
pub fn table_text(view: &TableView) -> String {
    if view.is_empty() {
        return match &view.empty_description {
            Some(description) => format!("{}\n{description}", view.empty_title),
            None => view.empty_title.clone(),
        };
    }

    let mut table = styled_table();
    let mut header: Vec<Cell> = view
        .headers
        .iter()
        .map(|h| {
            let label = match h.sorted {
                Some(direction) => format!("{} ({direction})", h.label),
                None => h.label.clone(),
            };
            header_cell(&label)
        })
        .collect();
    let has_actions = view.rows.iter().any(|row| !row.actions.is_empty());
    if has_actions {
        header.push(header_cell("Actions"));
    }
    table.set_header(header);

    for row in &view.rows {
        let mut cells: Vec<Cell> = row.cells.iter().map(Cell::new).collect();
        if has_actions {
            cells.push(Cell::new(row.actions.join(" | ")));
        }
        table.add_row(cells);
    }
    format!("{table}\n{} of {} rows", view.rows.len(), view.total)
}

/// Render a table view as a standalone HTML fragment.
pub fn table_html(view: &TableView) -> Result<String, askama::Error> {
    TableHtml { view }.render()
}

/// Render a plain grid of already formatted values.
pub fn grid_text(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = styled_table();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    table.to_string()
}

/// Write `text` and a newline to stdout.
pub fn emit(text: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use storedash_admin::api::mock;
    use storedash_admin::components::{TableQuery, products_table_config};

    use super::*;

    fn products_view(query: &TableQuery) -> TableView {
        products_table_config().view(&mock::products(), query)
    }

    #[test]
    fn test_table_text_lists_rows() {
        let text = table_text(&products_view(&TableQuery::default()));
        assert!(text.contains("#TB010332"));
        assert!(text.contains("Edit | Delete"));
        assert!(text.ends_with("3 of 3 rows"));
    }

    #[test]
    fn test_table_text_empty_state() {
        let text = table_text(&products_view(&TableQuery::default().search("nothing")));
        assert_eq!(
            text,
            "No products found.\nCreate your first product to get started."
        );
    }

    #[test]
    fn test_table_html_escapes_and_marks_sort() {
        let view = products_view(&TableQuery::default().toggle_sort("name"));
        let html = table_html(&view).unwrap();
        assert!(html.contains("<table id=\"products\""));
        assert!(html.contains("aria-sort=\"ascending\""));
        assert!(html.contains("<td>#TB010331</td>"));
    }

    #[test]
    fn test_grid_text() {
        let text = grid_text(&["Metric", "Value"], &[vec!["Orders".into(), "65,802".into()]]);
        assert!(text.contains("65,802"));
    }
}
