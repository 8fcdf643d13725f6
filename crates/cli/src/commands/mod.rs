//! CLI command implementations.

pub mod dashboard;
pub mod insights;
pub mod list;

use storedash_admin::api::{ApiClient, ApiMethods, DataKind, ParsedData, parse_api_response};
use storedash_admin::{AppError, DashboardConfig};

use crate::error::CliError;

/// Fetch one endpoint and normalize its payload.
async fn fetch<F, Fut>(
    config: &DashboardConfig,
    kind: DataKind,
    call: F,
) -> Result<Option<ParsedData>, CliError>
where
    F: FnOnce(ApiMethods) -> Fut,
    Fut: Future<Output = storedash_admin::api::ApiResponse>,
{
    let client = ApiClient::from_config(config).map_err(AppError::from)?;
    tracing::info!(base_url = %client.base_url(), %kind, "Fetching from dashboard API");
    let response = call(ApiMethods::new(client)).await;
    let parsed = parse_api_response(&response, kind);
    if parsed.success {
        Ok(parsed.data)
    } else {
        Err(CliError::Api(parsed.error.unwrap_or_default()))
    }
}
