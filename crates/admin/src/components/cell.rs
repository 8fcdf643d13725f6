//! Cell values addressed by column keys.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::models::{ChartPoint, Discount, Order, Product, User};

/// A single field of a canonical record, as seen by the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Lower-cased display form used for search matching.
    #[must_use]
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Total order over cells: numbers before text, numbers by value, text
    /// lexicographically.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)] // counts stay far below 2^53
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value.to_f64().unwrap_or_default())
    }
}

/// A canonical record whose fields can be read by key.
///
/// Keys are the camelCase field names the records serialize with.
pub trait TableRow {
    /// The value of field `key`, or `None` when the record has no such field.
    fn field(&self, key: &str) -> Option<CellValue>;
}

impl TableRow for Product {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "price" => self.price.into(),
            "formattedPrice" => self.formatted_price.as_str().into(),
            "sku" => self.sku.as_str().into(),
            "category" => self.category.as_str().into(),
            "status" => self.status.as_str().into(),
            "description" => self.description.as_str().into(),
            "image" => self.image.as_str().into(),
            "createdAt" => self.created_at.as_str().into(),
            "updatedAt" => self.updated_at.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for Order {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.as_str().into(),
            "productName" => self.product_name.as_str().into(),
            "customerName" => self.customer_name.as_str().into(),
            "price" => self.price.into(),
            "formattedPrice" => self.formatted_price.as_str().into(),
            "sku" => self.sku.as_str().into(),
            "category" => self.category.as_str().into(),
            "status" => self.status.as_str().into(),
            "quantity" => self.quantity.into(),
            "total" => self.total.into(),
            "formattedTotal" => self.formatted_total.as_str().into(),
            "orderDate" => self.order_date.as_str().into(),
            "deliveryDate" => self.delivery_date.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for User {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "avatar" => self.avatar.as_str().into(),
            "status" => self.status.as_str().into(),
            "joinDate" => self.join_date.as_str().into(),
            "lastLogin" => self.last_login.as_str().into(),
            "totalOrders" => self.total_orders.into(),
            "totalSpent" => self.total_spent.into(),
            "formattedTotalSpent" => self.formatted_total_spent.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for Discount {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "id" => self.id.as_str().into(),
            "productName" => self.product_name.as_str().into(),
            "userName" => self.user_name.as_str().into(),
            "discountAmount" => self.discount_amount.into(),
            "formattedDiscount" => self.formatted_discount.as_str().into(),
            "discountType" => self.discount_type.as_str().into(),
            "status" => self.status.as_str().into(),
            "validFrom" => self.valid_from.as_str().into(),
            "validTo" => self.valid_to.as_str().into(),
            "usageCount" => self.usage_count.into(),
            "maxUsage" => self.max_usage.into(),
            _ => return None,
        };
        Some(value)
    }
}

impl TableRow for ChartPoint {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value = match key {
            "name" => self.name.as_str().into(),
            "value" => self.value.into(),
            "first" => self.first.into(),
            "second" => self.second.into(),
            "third" => self.third.into(),
            "date" => self.date.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}
