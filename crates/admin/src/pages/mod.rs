//! Page-level state holders.
//!
//! Each page owns its rows and a `loading` flag that stays set until `load`
//! has waited out the configured delay. Row actions from the table
//! configurations in [`crate::components`] produce message values, and the
//! page applies them through one `apply` method.

mod dashboard;
mod form;
mod orders;
mod products;
mod users;

use std::time::Duration;

pub use dashboard::{DashboardPage, MetricCard, metric_cards};
pub use form::FormPage;
pub use orders::{OrderMessage, OrderStats, OrdersPage, enrich_orders};
pub use products::{ProductDraft, ProductMessage, ProductsPage};
pub use users::{UsersMessage, UsersPage, UsersTab};

/// Wait out the simulated network latency before showing data.
async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
