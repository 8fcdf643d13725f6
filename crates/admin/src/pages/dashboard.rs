//! Dashboard overview: metric cards and the revenue chart.

use std::time::Duration;

use serde::Serialize;

use super::simulate_latency;
use crate::api::mock;
use crate::models::{ChartPoint, DashboardSnapshot};
use crate::state::{AppAction, AppStore, DashboardSummary};

/// One headline metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    /// Period-over-period change (`+2.1%`).
    pub change: String,
}

impl MetricCard {
    fn new(title: &str, value: String, change: &str) -> Self {
        Self {
            title: title.to_string(),
            value,
            change: change.to_string(),
        }
    }
}

/// Build the four dashboard cards from a summary.
#[must_use]
pub fn metric_cards(summary: &DashboardSummary) -> Vec<MetricCard> {
    vec![
        MetricCard::new("Total Earning", summary.formatted_earning(), "+2.1%"),
        MetricCard::new("Orders", summary.formatted_orders(), "+1.8%"),
        MetricCard::new("Customers", summary.formatted_customers(), "+0.5%"),
        MetricCard::new("Products", summary.formatted_products(), "+3.2%"),
    ]
}

/// State of the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub loading: bool,
    pub revenue: Vec<ChartPoint>,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self {
            loading: true,
            revenue: Vec::new(),
        }
    }
}

impl DashboardPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the revenue series after `delay`.
    pub async fn load(&mut self, delay: Duration) {
        simulate_latency(delay).await;
        self.revenue = mock::revenue_data();
        self.loading = false;
    }

    /// Cards for the store's current figures.
    #[must_use]
    pub fn cards(store: &AppStore) -> Vec<MetricCard> {
        metric_cards(&store.state().dashboard)
    }

    /// Push freshly fetched analytics into the store.
    pub fn refresh(store: &mut AppStore, snapshot: &DashboardSnapshot) {
        store.dispatch(AppAction::UpdateDashboardData(snapshot.into()));
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_default_cards() {
        let cards = metric_cards(&DashboardSummary::default());
        let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["$981.35", "65,802", "79,958", "367"]);
        assert_eq!(cards[0].title, "Total Earning");
        assert_eq!(cards[3].change, "+3.2%");
    }

    #[tokio::test]
    async fn test_load_and_refresh() {
        let mut page = DashboardPage::new();
        page.load(Duration::ZERO).await;
        assert!(!page.loading);
        assert_eq!(page.revenue.len(), 6);

        let mut store = AppStore::default();
        let snapshot = DashboardSnapshot {
            total_earning: Decimal::from(1500),
            orders: 12,
            ..DashboardSnapshot::default()
        };
        DashboardPage::refresh(&mut store, &snapshot);
        let cards = DashboardPage::cards(&store);
        assert_eq!(cards[0].value, "$1,500.00");
        assert_eq!(cards[1].value, "12");
    }
}
