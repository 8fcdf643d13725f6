//! `sd-cli insights` - AI analysis of dashboard data.

use std::fmt::Write as _;

use clap::ValueEnum;
use storedash_admin::DashboardConfig;
use storedash_admin::api::{ApiMethods, DataKind, ParsedData, mock};
use storedash_admin::insights::{InsightsClient, InsightsResponse, mock_insights};
use storedash_admin::state::AppStore;

use super::fetch;
use crate::error::CliError;
use crate::render::emit;

/// What to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Topic {
    /// Headline dashboard figures
    Dashboard,
    /// The product catalog
    Products,
    /// Customer accounts, fetched from the dashboard API
    Customers,
}

pub async fn run(config: &DashboardConfig, topic: Topic, use_mock: bool) -> Result<(), CliError> {
    let response = if use_mock {
        mock_insights()
    } else {
        let client = InsightsClient::new(config.insights.clone())
            .map_err(storedash_admin::AppError::from)?;
        match topic {
            Topic::Dashboard => {
                let store = AppStore::default();
                client.dashboard_insights(&store.state().dashboard).await
            }
            Topic::Products => client.product_insights(&mock::products()).await,
            Topic::Customers => {
                let users = match fetch(config, DataKind::Users, |api: ApiMethods| async move {
                    api.get_users().await
                })
                .await?
                {
                    Some(ParsedData::Users(users)) => users,
                    Some(ParsedData::User(user)) => vec![user],
                    _ => Vec::new(),
                };
                client.customer_insights(&users).await
            }
        }
    };

    if !response.success {
        return Err(CliError::Insights(response.error.unwrap_or_default()));
    }
    emit(&insights_text(&response))?;
    Ok(())
}

fn insights_text(response: &InsightsResponse) -> String {
    let mut text = response.insights.as_deref().unwrap_or_default().trim().to_string();
    text.push_str("\n\nRecommendations:");
    for (i, rec) in response.recommendations.iter().enumerate() {
        let _ = write!(text, "\n  {}. {rec}", i + 1);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_text() {
        let text = insights_text(&mock_insights());
        assert!(text.starts_with("## Dashboard Performance Analysis"));
        assert!(text.ends_with("4. Enhance inventory management systems"));
    }
}
