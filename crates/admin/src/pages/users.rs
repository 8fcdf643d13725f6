//! Users page: per-user orders and discounts.

use std::fmt;
use std::time::Duration;

use storedash_core::{DiscountId, OrderId, OrderStatus};

use super::simulate_latency;
use crate::api::mock;
use crate::components::{
    TableQuery, TableView, discounts_table_config, user_orders_table_config,
};
use crate::models::{Discount, Order};

/// The two tabs of the users page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsersTab {
    #[default]
    Orders,
    Discounts,
}

impl UsersTab {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Orders => "User Details",
            Self::Discounts => "User Discount",
        }
    }
}

impl fmt::Display for UsersTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Actions raised by the users page tables and tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersMessage {
    SelectTab(UsersTab),
    /// Move an order back to `Process`.
    MarkProcess(OrderId),
    View(OrderId),
    ApplyDiscount(DiscountId),
}

/// State of the users page.
#[derive(Debug, Clone)]
pub struct UsersPage {
    pub loading: bool,
    pub tab: UsersTab,
    pub orders: Vec<Order>,
    pub discounts: Vec<Discount>,
    pub viewing: Option<OrderId>,
    /// Last discount the admin applied.
    pub applied_discount: Option<DiscountId>,
    pub query: TableQuery,
}

impl Default for UsersPage {
    fn default() -> Self {
        Self {
            loading: true,
            tab: UsersTab::default(),
            orders: Vec::new(),
            discounts: Vec::new(),
            viewing: None,
            applied_discount: None,
            query: TableQuery::default(),
        }
    }
}

impl UsersPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the sample orders and discounts after `delay`.
    pub async fn load(&mut self, delay: Duration) {
        simulate_latency(delay).await;
        self.orders = mock::orders();
        self.discounts = mock::user_discounts();
        self.loading = false;
    }

    pub fn apply(&mut self, message: UsersMessage) {
        match message {
            UsersMessage::SelectTab(tab) => {
                self.tab = tab;
                self.query = TableQuery::default();
            }
            UsersMessage::MarkProcess(id) => {
                if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                    order.status = OrderStatus::Process;
                    tracing::info!(order_id = %id, "Order moved to process");
                }
            }
            UsersMessage::View(id) => {
                tracing::info!(order_id = %id, "Viewing user order");
                self.viewing = Some(id);
            }
            UsersMessage::ApplyDiscount(id) => {
                tracing::info!(discount_id = %id, "Applying discount");
                self.applied_discount = Some(id);
            }
        }
    }

    /// Render the table of the active tab.
    #[must_use]
    pub fn view(&self) -> TableView {
        match self.tab {
            UsersTab::Orders => user_orders_table_config().view(&self.orders, &self.query),
            UsersTab::Discounts => discounts_table_config().view(&self.discounts, &self.query),
        }
    }
}
