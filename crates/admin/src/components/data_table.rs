//! Data table component types.
//!
//! A [`DataTableConfig`] describes a listing declaratively: its columns,
//! row actions, searchable fields and empty state. [`DataTableConfig::view`]
//! applies a [`TableQuery`] to a slice of canonical records and renders the
//! result into a [`TableView`] that templates and terminals can print.
//!
//! Row actions never touch the source list. Invoking one borrows the row
//! and returns a message; the page that owns the rows decides what to do
//! with it.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::cell::{CellValue, TableRow};
use super::search::{SortDirection, filter_by_search, sort_by_key};

type CellRenderer<T> = Arc<dyn Fn(&CellValue, &T) -> String + Send + Sync>;
type ActionHandler<T, M> = Arc<dyn Fn(&T) -> M + Send + Sync>;

/// Column definition for a data table.
pub struct TableColumn<T> {
    /// Field key on the row.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
    /// Fixed width hint (`120px`).
    pub width: Option<String>,
    render: Option<CellRenderer<T>>,
}

impl<T> TableColumn<T> {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            sortable: true,
            ..Self::new(key, label)
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    /// Set the width hint.
    #[must_use]
    pub fn width(mut self, width: &str) -> Self {
        self.width = Some(width.to_string());
        self
    }

    /// Set a presentation transform for this column's cells.
    ///
    /// The transform receives the cell value and the whole row and must not
    /// change either.
    #[must_use]
    pub fn render(
        mut self,
        render: impl Fn(&CellValue, &T) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Render this column's cell for `row`.
    ///
    /// Rows without the field render as an empty string.
    pub fn render_cell(&self, row: &T) -> String
    where
        T: TableRow,
    {
        let Some(value) = row.field(&self.key) else {
            return String::new();
        };
        match &self.render {
            Some(render) => render(&value, row),
            None => value.to_string(),
        }
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            width: self.width.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for TableColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Visual weight of a row action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Destructive,
}

/// Row-level action definition.
pub struct RowAction<T, M> {
    /// Button label.
    pub label: String,
    /// Button style.
    pub variant: ActionVariant,
    on_click: ActionHandler<T, M>,
}

impl<T, M> RowAction<T, M> {
    /// Create a new row action.
    #[must_use]
    pub fn new(label: &str, on_click: impl Fn(&T) -> M + Send + Sync + 'static) -> Self {
        Self {
            label: label.to_string(),
            variant: ActionVariant::default(),
            on_click: Arc::new(on_click),
        }
    }

    /// Set the button style.
    #[must_use]
    pub const fn variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Invoke the action on a row, producing the message for its page.
    pub fn invoke(&self, row: &T) -> M {
        (self.on_click)(row)
    }
}

impl<T, M> Clone for RowAction<T, M> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            variant: self.variant,
            on_click: Arc::clone(&self.on_click),
        }
    }
}

impl<T, M> fmt::Debug for RowAction<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

/// Sort request for a table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Search and sort state for one rendering of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    /// Free-text search term; empty keeps every row.
    pub search: String,
    /// Optional sort, applied after search.
    pub sort: Option<SortSpec>,
}

impl TableQuery {
    /// Set the search term.
    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    /// Sort by `key` in `direction`.
    #[must_use]
    pub fn sort_by(mut self, key: &str, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            key: key.to_string(),
            direction,
        });
        self
    }

    /// Toggle sorting on a column header the way clicking it does: a new key
    /// sorts ascending, the current key flips direction.
    #[must_use]
    pub fn toggle_sort(mut self, key: &str) -> Self {
        let direction = match &self.sort {
            Some(current) if current.key == key => current.direction.reversed(),
            _ => SortDirection::Asc,
        };
        self.sort = Some(SortSpec {
            key: key.to_string(),
            direction,
        });
        self
    }
}

/// Rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub width: Option<String>,
    /// Direction indicator when this column is the active sort.
    pub sorted: Option<SortDirection>,
}

/// One rendered row: display cells plus the labels of its actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub cells: Vec<String>,
    pub actions: Vec<String>,
}

/// A fully rendered table, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub table_id: String,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
    /// Rows before search.
    pub total: usize,
    pub search_placeholder: String,
    pub empty_title: String,
    pub empty_description: Option<String>,
}

impl TableView {
    /// Whether no rows survived the query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Configuration for a data table.
pub struct DataTableConfig<T, M> {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn<T>>,
    /// Row action definitions.
    pub actions: Vec<RowAction<T, M>>,
    /// Field keys searched by the free-text term.
    pub search_keys: Vec<String>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl<T, M> DataTableConfig<T, M> {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            actions: vec![],
            search_keys: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn<T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a row action.
    #[must_use]
    pub fn action(mut self, action: RowAction<T, M>) -> Self {
        self.actions.push(action);
        self
    }

    /// Set the searchable field keys.
    #[must_use]
    pub fn search_keys(mut self, keys: &[&str]) -> Self {
        self.search_keys = keys.iter().map(ToString::to_string).collect();
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Whether `key` names a sortable column.
    #[must_use]
    pub fn is_sortable(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.sortable && c.key == key)
    }

    /// Keys of the sortable columns, in column order.
    #[must_use]
    pub fn sortable_keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.key.as_str())
            .collect()
    }

    /// The action labelled `label`.
    #[must_use]
    pub fn find_action(&self, label: &str) -> Option<&RowAction<T, M>> {
        self.actions.iter().find(|a| a.label == label)
    }
}

impl<T: TableRow + Clone, M> DataTableConfig<T, M> {
    /// Apply search, then sort, returning the visible rows.
    ///
    /// A sort on a key that is not a sortable column is ignored.
    #[must_use]
    pub fn apply(&self, rows: &[T], query: &TableQuery) -> Vec<T> {
        let keys: Vec<&str> = self.search_keys.iter().map(String::as_str).collect();
        let filtered = filter_by_search(rows, &query.search, &keys);
        match &query.sort {
            Some(sort) if self.is_sortable(&sort.key) => {
                sort_by_key(&filtered, &sort.key, sort.direction)
            }
            Some(sort) => {
                tracing::debug!(
                    table = %self.table_id,
                    key = %sort.key,
                    "ignoring sort on non-sortable column"
                );
                filtered
            }
            None => filtered,
        }
    }

    /// Apply `query` to `rows` and render every visible cell.
    #[must_use]
    pub fn view(&self, rows: &[T], query: &TableQuery) -> TableView {
        let visible = self.apply(rows, query);
        let active = query
            .sort
            .as_ref()
            .filter(|sort| self.is_sortable(&sort.key));

        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                width: column.width.clone(),
                sorted: active
                    .filter(|sort| sort.key == column.key)
                    .map(|sort| sort.direction),
            })
            .collect();

        let action_labels: Vec<String> = self.actions.iter().map(|a| a.label.clone()).collect();
        let rendered = visible
            .iter()
            .map(|row| RenderedRow {
                cells: self.columns.iter().map(|c| c.render_cell(row)).collect(),
                actions: action_labels.clone(),
            })
            .collect();

        TableView {
            table_id: self.table_id.clone(),
            headers,
            rows: rendered,
            total: rows.len(),
            search_placeholder: self.search_placeholder.clone(),
            empty_title: self.empty_title.clone(),
            empty_description: self.empty_description.clone(),
        }
    }
}

impl<T, M> fmt::Debug for DataTableConfig<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTableConfig")
            .field("table_id", &self.table_id)
            .field("columns", &self.columns)
            .field("actions", &self.actions)
            .field("search_keys", &self.search_keys)
            .finish_non_exhaustive()
    }
}
