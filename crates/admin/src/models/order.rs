//! Order records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storedash_core::{OrderId, OrderStatus};

/// A customer order for a single product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product_name: String,
    pub customer_name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub formatted_price: String,
    pub sku: String,
    pub category: String,
    pub status: OrderStatus,
    /// Units ordered, at least one unless the record says otherwise.
    pub quantity: i64,
    /// Order total, falling back to the unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub formatted_total: String,
    pub order_date: String,
    pub delivery_date: String,
}
