//! Dashboard analytics records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate store metrics shown in the dashboard cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_earning: Decimal,
    pub formatted_total_earning: String,
    pub orders: i64,
    pub customers: i64,
    pub products: i64,
    pub growth_rate: f64,
    pub revenue_change: f64,
    pub orders_change: f64,
    pub customers_change: f64,
}

/// One point of the revenue chart.
///
/// `first`, `second` and `third` are the three plotted series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
    pub first: f64,
    pub second: f64,
    pub third: f64,
    pub date: String,
}
