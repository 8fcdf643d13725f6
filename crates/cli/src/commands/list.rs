//! `sd-cli list` - render a listing table.

use clap::ValueEnum;
use serde::Serialize;
use storedash_admin::DashboardConfig;
use storedash_admin::api::{ApiMethods, DataKind, ParsedData};
use storedash_admin::components::{
    DataTableConfig, SortDirection, TableQuery, TableRow, discounts_table_config,
    orders_table_config, products_table_config, user_orders_table_config,
};
use storedash_admin::pages::{OrdersPage, ProductsPage, UsersPage};

use super::fetch;
use crate::error::CliError;
use crate::render::{OutputFormat, emit, table_html, table_text};

/// Listings the CLI can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Products,
    Orders,
    /// Orders as shown on the users page
    UserOrders,
    /// Discounts granted to users
    Discounts,
}

/// Search, sort and output options of a listing.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub search: String,
    pub sort: Option<String>,
    pub desc: bool,
    pub format: OutputFormat,
    pub remote: bool,
}

impl ListOptions {
    fn query(&self) -> TableQuery {
        let query = TableQuery::default().search(&self.search);
        match &self.sort {
            Some(key) => {
                let direction = if self.desc { SortDirection::Desc } else { SortDirection::Asc };
                query.sort_by(key, direction)
            }
            None => query,
        }
    }
}

/// Load the rows for `kind` and print them.
pub async fn run(
    config: &DashboardConfig,
    kind: ListKind,
    options: &ListOptions,
) -> Result<(), CliError> {
    let query = options.query();
    let output = match kind {
        ListKind::Products => {
            let rows = if options.remote {
                match fetch(config, DataKind::Products, |api: ApiMethods| async move {
                    api.get_products().await
                })
                .await?
                {
                    Some(ParsedData::Products(rows)) => rows,
                    Some(ParsedData::Product(row)) => vec![row],
                    _ => Vec::new(),
                }
            } else {
                let mut page = ProductsPage::new();
                page.load(config.load_delay).await;
                page.products
            };
            render(&products_table_config(), &rows, &query, options.format)?
        }
        ListKind::Orders | ListKind::UserOrders => {
            let rows = if options.remote {
                match fetch(config, DataKind::Orders, |api: ApiMethods| async move {
                    api.get_orders().await
                })
                .await?
                {
                    Some(ParsedData::Orders(rows)) => rows,
                    Some(ParsedData::Order(row)) => vec![row],
                    _ => Vec::new(),
                }
            } else if kind == ListKind::Orders {
                let mut page = OrdersPage::new();
                page.load(config.load_delay).await;
                page.orders
            } else {
                let mut page = UsersPage::new();
                page.load(config.load_delay).await;
                page.orders
            };
            if kind == ListKind::Orders {
                render(&orders_table_config(), &rows, &query, options.format)?
            } else {
                render(&user_orders_table_config(), &rows, &query, options.format)?
            }
        }
        ListKind::Discounts => {
            let rows = if options.remote {
                match fetch(config, DataKind::Discounts, |api: ApiMethods| async move {
                    api.get_discounts().await
                })
                .await?
                {
                    Some(ParsedData::Discounts(rows)) => rows,
                    Some(ParsedData::Discount(row)) => vec![row],
                    _ => Vec::new(),
                }
            } else {
                let mut page = UsersPage::new();
                page.load(config.load_delay).await;
                page.discounts
            };
            render(&discounts_table_config(), &rows, &query, options.format)?
        }
    };
    emit(&output)?;
    Ok(())
}

fn render<T, M>(
    table: &DataTableConfig<T, M>,
    rows: &[T],
    query: &TableQuery,
    format: OutputFormat,
) -> Result<String, CliError>
where
    T: TableRow + Clone + Serialize,
{
    match format {
        OutputFormat::Table => Ok(table_text(&table.view(rows, query))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&table.apply(rows, query))?),
        OutputFormat::Html => Ok(table_html(&table.view(rows, query))?),
    }
}
