//! Built-in sample data.
//!
//! The raw records are deliberately loose, as an API would send them; the
//! typed accessors run them through the normalizer.

use serde_json::{Value, json};

use crate::models::{ChartPoint, Discount, Order, Product};
use crate::normalize::{normalize_chart, normalize_discounts, normalize_orders, normalize_products};

/// Raw sample products.
#[must_use]
pub fn raw_products() -> Value {
    json!([
        {"id": "#TB010331", "name": "Tery White", "price": 200, "sku": "000001", "category": "Cards", "status": "Draft"},
        {"id": "#TB010332", "name": "Tery White", "price": 200, "sku": "000002", "category": "Flex", "status": "Publish"},
        {"id": "#TB010333", "name": "Tery White", "price": 200, "sku": "000003", "category": "Flex", "status": "Publish"}
    ])
}

/// Raw sample orders.
#[must_use]
pub fn raw_orders() -> Value {
    json!([
        {"id": "#TB010331", "productName": "Tery White", "price": 200, "sku": "000001", "category": "Cards", "status": "Process"},
        {"id": "#TB010332", "productName": "Tery White", "price": 200, "sku": "000002", "category": "Flex", "status": "Delivered"},
        {"id": "#TB010333", "productName": "Tery White", "price": 200, "sku": "000003", "category": "Flex", "status": "Delivered"}
    ])
}

/// Raw monthly revenue series.
#[must_use]
pub fn raw_revenue_data() -> Value {
    json!([
        {"name": "Jan", "first": 80, "second": 45, "third": 60},
        {"name": "Feb", "first": 60, "second": 50, "third": 65},
        {"name": "Mar", "first": 85, "second": 60, "third": 55},
        {"name": "Apr", "first": 50, "second": 85, "third": 70},
        {"name": "May", "first": 40, "second": 45, "third": 80},
        {"name": "Jun", "first": 75, "second": 40, "third": 45}
    ])
}

/// Raw discounts granted to users.
#[must_use]
pub fn raw_user_discounts() -> Value {
    json!([
        {"id": 1, "productName": "Tery White", "userName": "John Doe", "discount": 15, "discountType": "percentage", "status": "Active"},
        {"id": 2, "productName": "Tery White", "userName": "Jane Smith", "discount": 20, "discountType": "percentage", "status": "Active"}
    ])
}

#[must_use]
pub fn products() -> Vec<Product> {
    normalize_products(&raw_products())
}

#[must_use]
pub fn orders() -> Vec<Order> {
    normalize_orders(&raw_orders())
}

#[must_use]
pub fn revenue_data() -> Vec<ChartPoint> {
    normalize_chart(&raw_revenue_data())
}

#[must_use]
pub fn user_discounts() -> Vec<Discount> {
    normalize_discounts(&raw_user_discounts())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use storedash_core::{DiscountType, OrderStatus, ProductStatus};

    use super::*;

    #[test]
    fn test_mock_products() {
        let products = products();
        assert_eq!(products.len(), 3);
        assert!(products.iter().all(|p| p.price == Decimal::from(200)));
        let statuses: Vec<_> = products.iter().map(|p| p.status.clone()).collect();
        assert_eq!(
            statuses,
            [ProductStatus::Draft, ProductStatus::Publish, ProductStatus::Publish]
        );
    }

    #[test]
    fn test_mock_orders() {
        let orders = orders();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].status, OrderStatus::Process);
        assert_eq!(orders[0].customer_name, "Unknown Customer");
        assert_eq!(orders[0].formatted_total, "$200.00");
    }

    #[test]
    fn test_mock_revenue() {
        let months: Vec<_> = revenue_data().into_iter().map(|p| p.name).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn test_mock_discounts() {
        let discounts = user_discounts();
        assert_eq!(discounts.len(), 2);
        assert_eq!(discounts[1].user_name, "Jane Smith");
        assert_eq!(discounts[1].discount_type, DiscountType::Percentage);
    }
}
