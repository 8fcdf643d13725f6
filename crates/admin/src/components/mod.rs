//! Tabular view components.
//!
//! Column and action descriptions ([`data_table`]), the cell model rows
//! expose to them ([`cell`]), client-side search and sort ([`search`]), and
//! the ready-made listings of the dashboard pages ([`tables`]).

pub mod cell;
pub mod data_table;
pub mod search;
pub mod tables;

pub use cell::{CellValue, TableRow};
pub use data_table::{
    ActionVariant, DataTableConfig, HeaderCell, RenderedRow, RowAction, SortSpec, TableColumn,
    TableQuery, TableView,
};
pub use search::{ParseSortDirectionError, SortDirection, filter_by_search, sort_by_key};
pub use tables::{
    discounts_table_config, orders_table_config, products_table_config, user_orders_table_config,
};
