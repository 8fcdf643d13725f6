//! Discount records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storedash_core::{DiscountId, DiscountStatus, DiscountType};

/// A discount granted to a user on a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: DiscountId,
    pub product_name: String,
    pub user_name: String,
    /// Amount off; a percentage when `discount_type` is `percentage`.
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_amount: Decimal,
    pub formatted_discount: String,
    pub discount_type: DiscountType,
    pub status: DiscountStatus,
    pub valid_from: String,
    pub valid_to: String,
    pub usage_count: i64,
    /// Usage cap, zero when uncapped.
    pub max_usage: i64,
}

impl Discount {
    /// Whether the usage cap has been reached.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.max_usage > 0 && self.usage_count >= self.max_usage
    }
}
