//! The record normalizer.
//!
//! Each function maps an arbitrarily-shaped raw JSON record onto exactly one
//! canonical model from [`crate::models`]. Field names are resolved
//! camelCase first, then snake_case, then legacy aliases; anything missing
//! or unparseable degrades to a fixed default. Normalization is pure and
//! never fails: a falsy input yields `None`, every other input a fully
//! populated record.
//!
//! The list variants accept any JSON value, return an empty list for
//! non-arrays, and drop entries that normalize to `None` while keeping the
//! relative order of the rest.

mod dashboard;
mod discounts;
mod form;
mod orders;
mod products;
mod raw;
mod users;

use serde_json::Value;

pub use dashboard::{normalize_chart, normalize_dashboard};
pub use discounts::{normalize_discount, normalize_discounts};
pub use form::normalize_product_form;
pub use orders::{normalize_order, normalize_orders};
pub use products::{normalize_product, normalize_products};
pub use raw::{RawRecord, is_falsy, is_present};
pub use users::{normalize_user, normalize_users};

use crate::helpers::format_date;

/// Map `normalize` over a raw array, dropping `None` results.
fn list_of<T>(raw: &Value, normalize: fn(&Value) -> Option<T>) -> Vec<T> {
    raw.as_array()
        .map(|items| items.iter().filter_map(normalize).collect())
        .unwrap_or_default()
}

/// Format the first present date among `keys`, or an empty string.
fn date_field(record: RawRecord<'_>, keys: &[&str]) -> String {
    record.get(keys).map(format_date).unwrap_or_default()
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}
