//! Dashboard metric and chart normalization.

use rust_decimal::Decimal;
use serde_json::Value;

use super::raw::{RawRecord, is_falsy};
use super::{date_field, list_of};
use crate::helpers::format_money;
use crate::models::{ChartPoint, DashboardSnapshot};

const TOTAL_EARNING: &[&str] = &["totalEarning", "total_earning"];

/// Normalize the aggregate dashboard metrics.
///
/// Every metric defaults to zero. Returns `None` for a falsy input.
#[must_use]
pub fn normalize_dashboard(raw: &Value) -> Option<DashboardSnapshot> {
    if is_falsy(raw) {
        return None;
    }
    let record = RawRecord::new(raw);

    let total_earning = record.decimal(TOTAL_EARNING).unwrap_or(Decimal::ZERO);
    Some(DashboardSnapshot {
        total_earning,
        formatted_total_earning: format_money(total_earning),
        orders: record.int(&["orders"]).unwrap_or(0),
        customers: record.int(&["customers"]).unwrap_or(0),
        products: record.int(&["products"]).unwrap_or(0),
        growth_rate: record.float(&["growthRate", "growth_rate"]).unwrap_or(0.0),
        revenue_change: record.float(&["revenueChange", "revenue_change"]).unwrap_or(0.0),
        orders_change: record.float(&["ordersChange", "orders_change"]).unwrap_or(0.0),
        customers_change: record
            .float(&["customersChange", "customers_change"])
            .unwrap_or(0.0),
    })
}

fn normalize_chart_point(raw: &Value) -> Option<ChartPoint> {
    if is_falsy(raw) {
        return None;
    }
    let record = RawRecord::new(raw);

    Some(ChartPoint {
        name: record.text_or(&["name", "label"], ""),
        value: record.float(&["value"]).unwrap_or(0.0),
        first: record.float(&["first", "dataset1"]).unwrap_or(0.0),
        second: record.float(&["second", "dataset2"]).unwrap_or(0.0),
        third: record.float(&["third", "dataset3"]).unwrap_or(0.0),
        date: date_field(record, &["date"]),
    })
}

/// Normalize a chart series.
///
/// Each series value falls back to its `datasetN` alias and the point name
/// to `label`. A non-array input yields an empty series.
#[must_use]
pub fn normalize_chart(raw: &Value) -> Vec<ChartPoint> {
    list_of(raw, normalize_chart_point)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_dashboard_defaults() {
        let snapshot = normalize_dashboard(&json!({})).unwrap();
        assert_eq!(snapshot, DashboardSnapshot {
            formatted_total_earning: "$0.00".to_owned(),
            ..DashboardSnapshot::default()
        });
        assert!(normalize_dashboard(&Value::Null).is_none());
    }

    #[test]
    fn test_dashboard_values() {
        let snapshot = normalize_dashboard(&json!({
            "total_earning": "981.35",
            "orders": 65802,
            "customers": "79958",
            "products": 367.9,
            "growth_rate": "2.1",
            "ordersChange": 1.8
        }))
        .unwrap();

        assert_eq!(snapshot.total_earning, Decimal::new(98135, 2));
        assert_eq!(snapshot.formatted_total_earning, "$981.35");
        assert_eq!(snapshot.orders, 65_802);
        assert_eq!(snapshot.customers, 79_958);
        assert_eq!(snapshot.products, 367);
        assert_eq!(snapshot.growth_rate, 2.1);
        assert_eq!(snapshot.orders_change, 1.8);
        assert_eq!(snapshot.revenue_change, 0.0);
    }

    #[test]
    fn test_chart_aliases() {
        let chart = normalize_chart(&json!([
            {"name": "Jan", "first": 80, "second": 45, "third": 60},
            {"label": "Feb", "dataset1": "60", "dataset2": 50, "dataset3": 65, "date": "2024-02-01"}
        ]));

        assert_eq!(chart.len(), 2);
        assert_eq!(chart[0].name, "Jan");
        assert_eq!(chart[0].first, 80.0);
        assert_eq!(chart[1].name, "Feb");
        assert_eq!(chart[1].first, 60.0);
        assert_eq!(chart[1].third, 65.0);
        assert_eq!(chart[1].date, "Feb 1, 2024");
    }

    #[test]
    fn test_chart_non_array() {
        assert!(normalize_chart(&json!({"name": "Jan"})).is_empty());
    }
}
