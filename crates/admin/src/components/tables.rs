//! Table configurations for the dashboard listings.

use storedash_core::DiscountType;

use super::data_table::{ActionVariant, DataTableConfig, RowAction, TableColumn};
use crate::models::{Discount, Order, Product};
use crate::pages::{OrderMessage, ProductMessage, UsersMessage};

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig<Product, ProductMessage> {
    DataTableConfig::new("products")
        .column(TableColumn::sortable("id", "Product ID").width("120px"))
        .column(TableColumn::sortable("name", "Product Name"))
        .column(
            TableColumn::sortable("price", "Price")
                .render(|_, row: &Product| row.formatted_price.clone()),
        )
        .column(TableColumn::sortable("sku", "SKU"))
        .column(TableColumn::sortable("category", "Category"))
        .column(TableColumn::sortable("status", "Status"))
        .action(
            RowAction::new("Edit", |row: &Product| ProductMessage::Edit(row.id.clone()))
                .variant(ActionVariant::Outline),
        )
        .action(
            RowAction::new("Delete", |row: &Product| {
                ProductMessage::RequestDelete(row.id.clone())
            })
            .variant(ActionVariant::Destructive),
        )
        .search_keys(&["name", "sku", "category"])
        .search_placeholder("Search products...")
        .empty_state(
            "No products found.",
            Some("Create your first product to get started."),
        )
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig<Order, OrderMessage> {
    DataTableConfig::new("orders")
        .column(TableColumn::sortable("id", "Order ID").width("120px"))
        .column(TableColumn::sortable("customerName", "Customer"))
        .column(TableColumn::sortable("productName", "Product"))
        .column(
            TableColumn::sortable("total", "Total")
                .render(|_, row: &Order| row.formatted_total.clone()),
        )
        .column(
            TableColumn::sortable("orderDate", "Order Date").render(|value, _: &Order| {
                let date = value.to_string();
                if date.is_empty() { "-".to_string() } else { date }
            }),
        )
        .column(TableColumn::sortable("status", "Status"))
        .action(
            RowAction::new("View Details", |row: &Order| {
                OrderMessage::ViewDetails(row.id.clone())
            })
            .variant(ActionVariant::Outline),
        )
        .action(RowAction::new("Update Status", |row: &Order| {
            OrderMessage::ToggleStatus(row.id.clone())
        }))
        .search_keys(&["customerName", "productName", "id"])
        .search_placeholder("Search orders...")
        .empty_state("No orders found.", None)
}

/// Build the user orders table configuration.
#[must_use]
pub fn user_orders_table_config() -> DataTableConfig<Order, UsersMessage> {
    DataTableConfig::new("user-orders")
        .column(TableColumn::sortable("id", "Order ID").width("120px"))
        .column(TableColumn::sortable("productName", "Product Name"))
        .column(
            TableColumn::sortable("price", "Price")
                .render(|_, row: &Order| row.formatted_price.clone()),
        )
        .column(TableColumn::sortable("sku", "SKU"))
        .column(TableColumn::sortable("category", "Category"))
        .column(TableColumn::sortable("status", "Status"))
        .action(
            RowAction::new("Process", |row: &Order| UsersMessage::MarkProcess(row.id.clone()))
                .variant(ActionVariant::Outline),
        )
        .action(
            RowAction::new("View", |row: &Order| UsersMessage::View(row.id.clone()))
                .variant(ActionVariant::Ghost),
        )
        .search_keys(&["productName", "sku", "category"])
        .empty_state("No user orders found.", None)
}

/// Build the user discounts table configuration.
///
/// Percentage discounts render as `15%`, fixed ones as currency.
#[must_use]
pub fn discounts_table_config() -> DataTableConfig<Discount, UsersMessage> {
    DataTableConfig::new("user-discounts")
        .column(TableColumn::sortable("productName", "Product Name"))
        .column(TableColumn::sortable("userName", "User Name"))
        .column(
            TableColumn::sortable("discountAmount", "Discount").render(|value, row: &Discount| {
                match row.discount_type {
                    DiscountType::Percentage => format!("{value}%"),
                    _ => row.formatted_discount.clone(),
                }
            }),
        )
        .column(TableColumn::sortable("status", "Status"))
        .action(RowAction::new("Apply Now", |row: &Discount| {
            UsersMessage::ApplyDiscount(row.id.clone())
        }))
        .search_keys(&["productName", "userName"])
        .search_placeholder("Search for customer or product...")
        .empty_state("No discount data found.", None)
}
