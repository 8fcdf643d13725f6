//! Order normalization.

use rust_decimal::Decimal;
use serde_json::Value;
use storedash_core::{OrderId, OrderStatus};

use super::raw::{RawRecord, is_falsy};
use super::{date_field, list_of, non_empty};
use crate::helpers::{capitalize_first, format_money};
use crate::models::Order;

const PRICE: &[&str] = &["price", "unitPrice", "unit_price"];
const TOTAL: &[&str] = &["total", "totalPrice", "total_price"];

/// Normalize one raw order record.
///
/// Quantity defaults to one. The total falls back to the unit price when it
/// is absent or zero, and the formatted total follows the same fallback on
/// the raw values.
#[must_use]
pub fn normalize_order(raw: &Value) -> Option<Order> {
    if is_falsy(raw) {
        return None;
    }
    let record = RawRecord::new(raw);

    let price = record.decimal(PRICE).unwrap_or(Decimal::ZERO);
    let total = record
        .decimal(TOTAL)
        .or_else(|| record.decimal(PRICE))
        .unwrap_or(Decimal::ZERO);
    let order = Order {
        id: OrderId::new(record.text_or(&["id", "orderId", "order_id"], "")),
        product_name: record.text_or(&["productName", "product_name"], "Unknown Product"),
        customer_name: record.text_or(&["customerName", "customer_name"], "Unknown Customer"),
        price,
        formatted_price: format_money(price),
        sku: record.text_or(&["sku", "productSku", "product_sku"], ""),
        category: non_empty(record.text(&["category"]).map(|c| capitalize_first(&c)))
            .unwrap_or_else(|| "Uncategorized".to_owned()),
        status: record
            .text(&["status"])
            .map(|s| OrderStatus::from_label(&s))
            .unwrap_or_default(),
        quantity: record.int(&["quantity", "qty"]).unwrap_or(1),
        total,
        formatted_total: format_money(total),
        order_date: date_field(record, &["orderDate", "order_date"]),
        delivery_date: date_field(record, &["deliveryDate", "delivery_date"]),
    };

    tracing::trace!(id = %order.id, status = %order.status, "normalized order");
    Some(order)
}

/// Normalize a list of raw orders, dropping falsy entries.
#[must_use]
pub fn normalize_orders(raw: &Value) -> Vec<Order> {
    list_of(raw, normalize_order)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_order_is_fully_defaulted() {
        let order = normalize_order(&json!({})).unwrap();

        assert_eq!(order.id.as_str(), "");
        assert_eq!(order.product_name, "Unknown Product");
        assert_eq!(order.customer_name, "Unknown Customer");
        assert_eq!(order.price, Decimal::ZERO);
        assert_eq!(order.formatted_price, "$0.00");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.quantity, 1);
        assert_eq!(order.total, Decimal::ZERO);
        assert_eq!(order.formatted_total, "$0.00");
        assert_eq!(order.order_date, "");
        assert_eq!(order.delivery_date, "");
    }

    #[test]
    fn test_camel_case_wins_over_snake_case() {
        let order = normalize_order(&json!({
            "productName": "Camel",
            "product_name": "Snake",
            "customerName": "Ada",
            "customer_name": "Grace"
        }))
        .unwrap();

        assert_eq!(order.product_name, "Camel");
        assert_eq!(order.customer_name, "Ada");
    }

    #[test]
    fn test_total_falls_back_to_price() {
        let order = normalize_order(&json!({"price": "200", "total": 0})).unwrap();
        assert_eq!(order.total, Decimal::from(200));
        assert_eq!(order.formatted_total, "$200.00");

        let order = normalize_order(&json!({"price": 200, "total": "450.5", "quantity": "3"}))
            .unwrap();
        assert_eq!(order.total, Decimal::new(4505, 1));
        assert_eq!(order.formatted_total, "$450.50");
        assert_eq!(order.quantity, 3);
    }

    #[test]
    fn test_formatted_total_follows_numeric_total() {
        let order = normalize_order(&json!({"price": "5", "total": "abc"})).unwrap();
        assert_eq!(order.total, Decimal::from(5));
        assert_eq!(order.formatted_total, "$5.00");

        let order = normalize_order(&json!({"price": "12.5 each"})).unwrap();
        assert_eq!(order.formatted_price, "$12.50");
        assert_eq!(order.formatted_total, "$12.50");
    }

    #[test]
    fn test_status_and_dates() {
        let order = normalize_order(&json!({
            "status": "DELIVERED",
            "category": "flex",
            "order_date": "2024-03-01",
            "delivery_date": "not a date"
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.category, "Flex");
        assert_eq!(order.order_date, "Mar 1, 2024");
        assert_eq!(order.delivery_date, "");
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let order = normalize_order(&json!({"status": "on hold"})).unwrap();
        assert_eq!(order.status.as_str(), "On hold");
    }

    #[test]
    fn test_list_drops_falsy() {
        let orders = normalize_orders(&json!([{"id": "1"}, 0, {"id": "2"}, ""]));
        let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }
}
