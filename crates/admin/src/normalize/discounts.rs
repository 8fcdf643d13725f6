//! Discount normalization.

use rust_decimal::Decimal;
use serde_json::Value;
use storedash_core::{DiscountId, DiscountStatus, DiscountType};

use super::raw::{RawRecord, is_falsy};
use super::{date_field, list_of};
use crate::helpers::format_money;
use crate::models::Discount;

const AMOUNT: &[&str] = &["discountAmount", "discount_amount", "discount"];

/// Normalize one raw discount record.
///
/// The amount is read from `discountAmount`, falling back to `discount`.
#[must_use]
pub fn normalize_discount(raw: &Value) -> Option<Discount> {
    if is_falsy(raw) {
        return None;
    }
    let record = RawRecord::new(raw);

    let amount = record.decimal(AMOUNT).unwrap_or(Decimal::ZERO);
    let discount = Discount {
        id: DiscountId::new(record.text_or(&["id", "discountId", "discount_id"], "")),
        product_name: record.text_or(&["productName", "product_name"], ""),
        user_name: record.text_or(&["userName", "user_name"], ""),
        discount_amount: amount,
        formatted_discount: format_money(amount),
        discount_type: record
            .text(&["discountType", "discount_type"])
            .map(|t| DiscountType::from_label(&t))
            .unwrap_or_default(),
        status: record
            .text(&["status"])
            .map(|s| DiscountStatus::from_label(&s))
            .unwrap_or_default(),
        valid_from: date_field(record, &["validFrom", "valid_from"]),
        valid_to: date_field(record, &["validTo", "valid_to"]),
        usage_count: record.int(&["usageCount", "usage_count"]).unwrap_or(0),
        max_usage: record.int(&["maxUsage", "max_usage"]).unwrap_or(0),
    };

    tracing::trace!(id = %discount.id, "normalized discount");
    Some(discount)
}

/// Normalize a list of raw discounts, dropping falsy entries.
#[must_use]
pub fn normalize_discounts(raw: &Value) -> Vec<Discount> {
    list_of(raw, normalize_discount)
}
