//! Product normalization.

use rust_decimal::Decimal;
use serde_json::Value;
use storedash_core::{ProductId, ProductStatus};

use super::raw::{RawRecord, is_falsy};
use super::{date_field, list_of, non_empty};
use crate::helpers::{capitalize_first, format_money};
use crate::models::Product;

const DEFAULT_NAME: &str = "Unnamed Product";
const DEFAULT_CATEGORY: &str = "Uncategorized";
const PLACEHOLDER_TEXT: &str = "Product Image";
const PLACEHOLDER_BASE: &str = "https://placehold.co/300x200?text=";

/// Normalize one raw product record.
///
/// Returns `None` for a falsy input.
#[must_use]
pub fn normalize_product(raw: &Value) -> Option<Product> {
    if is_falsy(raw) {
        return None;
    }
    let record = RawRecord::new(raw);

    let raw_name = record.text(&["name", "productName", "product_name"]);
    let image = record.text(&["image", "imageUrl", "image_url"]).unwrap_or_else(|| {
        let label = raw_name.as_deref().unwrap_or(PLACEHOLDER_TEXT);
        format!("{PLACEHOLDER_BASE}{}", urlencoding::encode(label))
    });

    let price = record.decimal(&["price"]).unwrap_or(Decimal::ZERO);
    let product = Product {
        id: ProductId::new(record.text_or(&["id", "productId", "product_id"], "")),
        name: raw_name.unwrap_or_else(|| DEFAULT_NAME.to_owned()),
        price,
        formatted_price: format_money(price),
        sku: record.text_or(&["sku", "productSku", "product_sku"], ""),
        category: non_empty(record.text(&["category"]).map(|c| capitalize_first(&c)))
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
        status: record
            .text(&["status"])
            .map(|s| ProductStatus::from_label(&s))
            .unwrap_or_default(),
        description: record.text_or(&["description"], ""),
        image,
        created_at: date_field(record, &["createdAt", "created_at"]),
        updated_at: date_field(record, &["updatedAt", "updated_at"]),
    };

    tracing::trace!(id = %product.id, "normalized product");
    Some(product)
}

/// Normalize a list of raw products, dropping falsy entries.
#[must_use]
pub fn normalize_products(raw: &Value) -> Vec<Product> {
    list_of(raw, normalize_product)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_snake_case_product() {
        let product =
            normalize_product(&json!({"product_name": "Widget", "price": "19.99", "status": "draft"}))
                .unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.formatted_price, "$19.99");
        assert_eq!(product.status, ProductStatus::Draft);
        assert_eq!(product.category, "Uncategorized");
        assert_eq!(product.id.as_str(), "");
        assert_eq!(product.created_at, "");
    }

    #[test]
    fn test_missing_price_formats_as_zero() {
        let product = normalize_product(&json!({"name": "Free"})).unwrap();
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.formatted_price, "$0.00");
    }

    #[test]
    fn test_unparseable_price() {
        let product = normalize_product(&json!({"price": "n/a"})).unwrap();
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.formatted_price, "$0.00");
    }

    #[test]
    fn test_formatted_price_follows_numeric_price() {
        let product = normalize_product(&json!({"price": "19.99 USD"})).unwrap();
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.formatted_price, "$19.99");
    }

    #[test]
    fn test_price_beyond_decimal_range_is_zero() {
        let product = normalize_product(&json!({"price": 1e30})).unwrap();
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.formatted_price, "$0.00");
    }

    #[test]
    fn test_full_record() {
        let product = normalize_product(&json!({
            "id": "#TB010331",
            "name": "Tery White",
            "price": 200,
            "sku": "000001",
            "category": "CARDS",
            "status": "publish",
            "description": "Greeting card",
            "image": "https://cdn.example.com/tery.png",
            "created_at": "2024-01-05T10:00:00Z",
            "updatedAt": "2024-02-10"
        }))
        .unwrap();

        assert_eq!(product.id.as_str(), "#TB010331");
        assert_eq!(product.formatted_price, "$200.00");
        assert_eq!(product.category, "Cards");
        assert_eq!(product.status, ProductStatus::Publish);
        assert_eq!(product.image, "https://cdn.example.com/tery.png");
        assert_eq!(product.created_at, "Jan 5, 2024");
        assert_eq!(product.updated_at, "Feb 10, 2024");
    }

    #[test]
    fn test_placeholder_image() {
        let named = normalize_product(&json!({"name": "Blue Mug"})).unwrap();
        assert_eq!(named.image, "https://placehold.co/300x200?text=Blue%20Mug");

        let unnamed = normalize_product(&json!({"price": 1})).unwrap();
        assert_eq!(unnamed.name, "Unnamed Product");
        assert_eq!(
            unnamed.image,
            "https://placehold.co/300x200?text=Product%20Image"
        );
    }

    #[test]
    fn test_falsy_input() {
        assert!(normalize_product(&Value::Null).is_none());
        assert!(normalize_product(&json!(false)).is_none());
        assert!(normalize_product(&json!("")).is_none());
    }

    #[test]
    fn test_list_drops_falsy_entries_in_order() {
        let products = normalize_products(&json!([
            {"name": "A"},
            null,
            {"name": "B"},
            {"name": "C"}
        ]));
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_list_of_non_array() {
        assert!(normalize_products(&json!({"name": "A"})).is_empty());
        assert!(normalize_products(&Value::Null).is_empty());
    }
}
