//! Product information form normalization.

use rust_decimal::Decimal;
use serde_json::Value;

use super::raw::{RawRecord, is_falsy};
use crate::models::ProductForm;

/// Normalize a submitted product form.
///
/// Unlike the record normalizers this never returns `None`: a falsy input
/// yields the all-default form.
#[must_use]
pub fn normalize_product_form(raw: &Value) -> ProductForm {
    if is_falsy(raw) {
        return ProductForm::default();
    }
    let record = RawRecord::new(raw);

    ProductForm {
        manufacturer_name: record.text_or(&["manufacturerName", "manufacturer_name"], ""),
        manufacturer_brand: record.text_or(&["manufacturerBrand", "manufacturer_brand"], ""),
        stocks: record.int(&["stocks"]).unwrap_or(0),
        price: record.decimal(&["price"]).unwrap_or(Decimal::ZERO),
        discount: record.float(&["discount"]).unwrap_or(0.0),
        orders: record.int(&["orders"]).unwrap_or(0),
        colors: record.strings(&["colors"]),
        size: record.text_or(&["size"], ""),
        description: record.text_or(&["description"], ""),
        category: record.text_or(&["category"], ""),
        tags: record.strings(&["tags"]),
    }
}
