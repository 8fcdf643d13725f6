//! Customer account normalization.

use rust_decimal::Decimal;
use serde_json::Value;
use storedash_core::{AccountStatus, UserId};

use super::raw::{RawRecord, is_falsy};
use super::{date_field, list_of};
use crate::helpers::format_money;
use crate::models::User;

const AVATAR_BASE: &str = "https://placehold.co/40x40?text=";
const TOTAL_SPENT: &[&str] = &["totalSpent", "total_spent"];

/// Normalize one raw user record.
///
/// A user without an avatar gets a placeholder showing the first letter of
/// their name.
#[must_use]
pub fn normalize_user(raw: &Value) -> Option<User> {
    if is_falsy(raw) {
        return None;
    }
    let record = RawRecord::new(raw);

    let raw_name = record.text(&["name", "fullName", "full_name"]);
    let avatar = record.text(&["avatar", "avatarUrl", "avatar_url"]).unwrap_or_else(|| {
        let initial = raw_name
            .as_deref()
            .and_then(|n| n.chars().next())
            .map_or_else(|| "U".to_owned(), String::from);
        format!("{AVATAR_BASE}{}", urlencoding::encode(&initial))
    });

    let total_spent = record.decimal(TOTAL_SPENT).unwrap_or(Decimal::ZERO);
    let user = User {
        id: UserId::new(record.text_or(&["id", "userId", "user_id"], "")),
        name: raw_name.unwrap_or_else(|| "Unknown User".to_owned()),
        email: record.text_or(&["email"], ""),
        phone: record.text_or(&["phone", "phoneNumber", "phone_number"], ""),
        avatar,
        status: record
            .text(&["status"])
            .map(|s| AccountStatus::from_label(&s))
            .unwrap_or_default(),
        join_date: date_field(record, &["joinDate", "join_date", "createdAt", "created_at"]),
        last_login: date_field(record, &["lastLogin", "last_login"]),
        total_orders: record.int(&["totalOrders", "total_orders"]).unwrap_or(0),
        total_spent,
        formatted_total_spent: format_money(total_spent),
    };

    tracing::trace!(id = %user.id, "normalized user");
    Some(user)
}

/// Normalize a list of raw users, dropping falsy entries.
#[must_use]
pub fn normalize_users(raw: &Value) -> Vec<User> {
    list_of(raw, normalize_user)
}
