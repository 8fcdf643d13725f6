//! Orders listing.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use storedash_core::{OrderId, OrderStatus};

use super::simulate_latency;
use crate::api::mock;
use crate::components::{TableQuery, TableView, orders_table_config};
use crate::models::Order;
use crate::normalize::normalize_orders;

const DEFAULT_CUSTOMER: &str = "John Doe";
const DELIVERY_DAYS: i64 = 7;

/// Actions raised by the orders table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderMessage {
    ViewDetails(OrderId),
    CloseDetails,
    /// Advance `Process` to `Delivered`, anything else back to `Process`.
    ToggleStatus(OrderId),
}

/// Order counts per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderStats {
    pub total: usize,
    pub process: usize,
    pub delivered: usize,
    pub pending: usize,
}

/// Fill in the customer and dates the sample orders lack.
///
/// Every entry gets `customerName`, an `orderDate` of `now` and a
/// `deliveryDate` a week later. Non-object entries pass through.
#[must_use]
pub fn enrich_orders(raw: &Value, now: DateTime<Utc>) -> Value {
    let delivery = now + TimeDelta::days(DELIVERY_DAYS);
    let Some(items) = raw.as_array() else {
        return raw.clone();
    };
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if let Some(fields) = item.as_object_mut() {
                fields.insert("customerName".into(), json!(DEFAULT_CUSTOMER));
                fields.insert("orderDate".into(), json!(now.to_rfc3339()));
                fields.insert("deliveryDate".into(), json!(delivery.to_rfc3339()));
            }
            item
        })
        .collect()
}

/// State of the orders page.
#[derive(Debug, Clone)]
pub struct OrdersPage {
    pub loading: bool,
    pub orders: Vec<Order>,
    /// Order shown in the details panel.
    pub details: Option<OrderId>,
    pub query: TableQuery,
}

impl Default for OrdersPage {
    fn default() -> Self {
        Self {
            loading: true,
            orders: Vec::new(),
            details: None,
            query: TableQuery::default(),
        }
    }
}

impl OrdersPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the sample orders after `delay`.
    pub async fn load(&mut self, delay: Duration) {
        simulate_latency(delay).await;
        let raw = enrich_orders(&mock::raw_orders(), Utc::now());
        self.set_orders(normalize_orders(&raw));
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.loading = false;
    }

    pub fn apply(&mut self, message: OrderMessage) {
        match message {
            OrderMessage::ViewDetails(id) => self.details = Some(id),
            OrderMessage::CloseDetails => self.details = None,
            OrderMessage::ToggleStatus(id) => {
                if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                    order.status = order.status.toggled();
                    tracing::info!(order_id = %id, status = %order.status, "Order status updated");
                }
            }
        }
    }

    /// The order in the details panel, if any.
    #[must_use]
    pub fn details_order(&self) -> Option<&Order> {
        let id = self.details.as_ref()?;
        self.orders.iter().find(|o| &o.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> OrderStats {
        let count = |status: &OrderStatus| self.orders.iter().filter(|o| &o.status == status).count();
        OrderStats {
            total: self.orders.len(),
            process: count(&OrderStatus::Process),
            delivered: count(&OrderStatus::Delivered),
            pending: count(&OrderStatus::Pending),
        }
    }

    #[must_use]
    pub fn view(&self) -> TableView {
        orders_table_config().view(&self.orders, &self.query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_enrich_orders() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
        let orders = normalize_orders(&enrich_orders(&mock::raw_orders(), now));
        assert_eq!(orders[0].customer_name, "John Doe");
        assert_eq!(orders[0].order_date, "Jan 5, 2024");
        assert_eq!(orders[0].delivery_date, "Jan 12, 2024");
    }

    #[test]
    fn test_enrich_non_array_passes_through() {
        let raw = json!({"orders": []});
        assert_eq!(enrich_orders(&raw, Utc::now()), raw);
    }

    #[tokio::test]
    async fn test_load_and_stats() {
        let mut page = OrdersPage::new();
        page.load(Duration::ZERO).await;
        assert!(!page.loading);
        assert_eq!(
            page.stats(),
            OrderStats {
                total: 3,
                process: 1,
                delivered: 2,
                pending: 0
            }
        );
    }

    #[tokio::test]
    async fn test_toggle_status() {
        let mut page = OrdersPage::new();
        page.load(Duration::ZERO).await;
        let first = page.orders[0].id.clone();
        let second = page.orders[1].id.clone();

        page.apply(OrderMessage::ToggleStatus(first));
        page.apply(OrderMessage::ToggleStatus(second));
        assert_eq!(page.orders[0].status, OrderStatus::Delivered);
        assert_eq!(page.orders[1].status, OrderStatus::Process);
    }

    #[tokio::test]
    async fn test_details_panel() {
        let mut page = OrdersPage::new();
        page.load(Duration::ZERO).await;
        let id = page.orders[2].id.clone();

        page.apply(OrderMessage::ViewDetails(id.clone()));
        assert_eq!(page.details_order().unwrap().id, id);
        page.apply(OrderMessage::CloseDetails);
        assert!(page.details_order().is_none());
    }
}
