//! Application state shared across pages.
//!
//! State changes go through a single [`reduce`] function, so every update is
//! a whole-object replacement that can be tested without a running UI.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::helpers::{format_money, format_number};
use crate::models::DashboardSnapshot;

/// The signed-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@dashboard.com".to_string(),
            avatar: "https://placehold.co/40x40?text=AU".to_string(),
        }
    }
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_earning: Decimal,
    pub total_orders: i64,
    pub total_customers: i64,
    pub total_products: i64,
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self {
            total_earning: Decimal::new(98_135, 2),
            total_orders: 65_802,
            total_customers: 79_958,
            total_products: 367,
        }
    }
}

impl DashboardSummary {
    /// Earnings as a currency string.
    #[must_use]
    pub fn formatted_earning(&self) -> String {
        format_money(self.total_earning)
    }

    #[must_use]
    pub fn formatted_orders(&self) -> String {
        format_number(self.total_orders)
    }

    #[must_use]
    pub fn formatted_customers(&self) -> String {
        format_number(self.total_customers)
    }

    #[must_use]
    pub fn formatted_products(&self) -> String {
        format_number(self.total_products)
    }
}

impl From<&DashboardSnapshot> for DashboardSummary {
    fn from(snapshot: &DashboardSnapshot) -> Self {
        Self {
            total_earning: snapshot.total_earning,
            total_orders: snapshot.orders,
            total_customers: snapshot.customers,
            total_products: snapshot.products,
        }
    }
}

/// Global dashboard state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    pub user: UserProfile,
    pub dashboard: DashboardSummary,
}

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Replace the signed-in user.
    SetUser(UserProfile),
    /// Replace the dashboard figures.
    UpdateDashboardData(DashboardSummary),
}

/// Apply an action, producing the next state.
#[must_use]
pub fn reduce(state: &AppState, action: AppAction) -> AppState {
    match action {
        AppAction::SetUser(user) => AppState {
            user,
            ..state.clone()
        },
        AppAction::UpdateDashboardData(dashboard) => AppState {
            dashboard,
            ..state.clone()
        },
    }
}

/// Owner of the current [`AppState`].
#[derive(Debug, Clone, Default)]
pub struct AppStore {
    state: AppState,
}

impl AppStore {
    #[must_use]
    pub const fn new(state: AppState) -> Self {
        Self { state }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action to the current state.
    pub fn dispatch(&mut self, action: AppAction) {
        tracing::debug!(?action, "Dispatching app action");
        self.state = reduce(&self.state, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.user.name, "Admin User");
        assert_eq!(state.user.email, "admin@dashboard.com");
        assert_eq!(state.dashboard.formatted_earning(), "$981.35");
        assert_eq!(state.dashboard.formatted_orders(), "65,802");
        assert_eq!(state.dashboard.formatted_customers(), "79,958");
        assert_eq!(state.dashboard.formatted_products(), "367");
    }

    #[test]
    fn test_reduce_replaces_user_only() {
        let state = AppState::default();
        let user = UserProfile {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            avatar: String::new(),
        };
        let next = reduce(&state, AppAction::SetUser(user.clone()));
        assert_eq!(next.user, user);
        assert_eq!(next.dashboard, state.dashboard);
        // the input state is untouched
        assert_eq!(state.user.name, "Admin User");
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = AppStore::default();
        let summary = DashboardSummary {
            total_earning: Decimal::from(10),
            total_orders: 1,
            total_customers: 2,
            total_products: 3,
        };
        store.dispatch(AppAction::UpdateDashboardData(summary.clone()));
        assert_eq!(store.state().dashboard, summary);
        assert_eq!(store.state().user, UserProfile::default());
    }

    #[test]
    fn test_summary_from_snapshot() {
        let snapshot = DashboardSnapshot {
            total_earning: Decimal::new(1050, 1),
            orders: 7,
            customers: 8,
            products: 9,
            ..DashboardSnapshot::default()
        };
        let summary = DashboardSummary::from(&snapshot);
        assert_eq!(summary.total_orders, 7);
        assert_eq!(summary.formatted_earning(), "$105.00");
    }
}
