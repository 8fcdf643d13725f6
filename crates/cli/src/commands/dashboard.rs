//! `sd-cli dashboard` - metric cards and revenue series.

use storedash_admin::DashboardConfig;
use storedash_admin::api::{ApiMethods, DataKind, ParsedData};
use storedash_admin::models::ChartPoint;
use storedash_admin::pages::{DashboardPage, MetricCard};
use storedash_admin::state::AppStore;

use super::fetch;
use crate::error::CliError;
use crate::render::{emit, grid_text};

pub async fn run(config: &DashboardConfig, remote: bool) -> Result<(), CliError> {
    let mut store = AppStore::default();
    let mut page = DashboardPage::new();
    page.load(config.load_delay).await;

    if remote {
        let data = fetch(config, DataKind::Dashboard, |api: ApiMethods| async move {
            api.get_dashboard_data().await
        })
        .await?;
        match data {
            Some(ParsedData::Dashboard(snapshot)) => DashboardPage::refresh(&mut store, &snapshot),
            _ => tracing::warn!("Dashboard API returned no analytics, keeping defaults"),
        }
    }

    emit(&cards_text(&DashboardPage::cards(&store)))?;
    emit(&revenue_text(&page.revenue))?;
    Ok(())
}

fn cards_text(cards: &[MetricCard]) -> String {
    let rows: Vec<Vec<String>> = cards
        .iter()
        .map(|card| vec![card.title.clone(), card.value.clone(), card.change.clone()])
        .collect();
    grid_text(&["Metric", "Value", "Change"], &rows)
}

fn revenue_text(points: &[ChartPoint]) -> String {
    let rows: Vec<Vec<String>> = points
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                p.first.to_string(),
                p.second.to_string(),
                p.third.to_string(),
            ]
        })
        .collect();
    grid_text(&["Month", "First", "Second", "Third"], &rows)
}
