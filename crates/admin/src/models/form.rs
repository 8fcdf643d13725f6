//! Product information form submissions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A submitted product information form, fully defaulted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub manufacturer_name: String,
    pub manufacturer_brand: String,
    pub stocks: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub discount: f64,
    pub orders: i64,
    pub colors: Vec<String>,
    pub size: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
}
