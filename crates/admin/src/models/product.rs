//! Product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storedash_core::{ProductId, ProductStatus};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier, carried through unchanged.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Unit price as a currency string (`$19.99`).
    pub formatted_price: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Capitalized category label.
    pub category: String,
    /// Publication status.
    pub status: ProductStatus,
    /// Long description.
    pub description: String,
    /// Image URL, a placeholder when the record has none.
    pub image: String,
    /// Creation date (`Jan 5, 2024`), empty when unknown.
    pub created_at: String,
    /// Last update date, empty when unknown.
    pub updated_at: String,
}
