//! Canonical dashboard records.
//!
//! These are the fully-defaulted shapes produced by [`crate::normalize`].
//! Every field is always populated, so the table and page layers never
//! deal with missing data. They serialize with camelCase keys, matching the
//! field keys the table columns address.

mod dashboard;
mod discount;
mod form;
mod order;
mod product;
mod user;

pub use dashboard::{ChartPoint, DashboardSnapshot};
pub use discount::Discount;
pub use form::ProductForm;
pub use order::Order;
pub use product::Product;
pub use user::User;
