//! Customer account records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storedash_core::{AccountStatus, UserId};

/// A customer account with aggregate order figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Avatar URL, a generated initial placeholder when absent.
    pub avatar: String,
    pub status: AccountStatus,
    pub join_date: String,
    pub last_login: String,
    pub total_orders: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    pub formatted_total_spent: String,
}
