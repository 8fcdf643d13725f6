//! HTTP client for the dashboard API.
//!
//! Every call resolves to an [`ApiResponse`] envelope. Transport failures,
//! non-success statuses and undecodable bodies are logged and converted to
//! a failed envelope, so callers never see an `Err`.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::instrument;

use crate::config::DashboardConfig;

use super::error::ApiError;
use super::types::{ApiRequest, ApiResponse};

/// Dashboard API client.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client whose relative paths resolve against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client from dashboard configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url)
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// The base URL relative paths resolve against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Perform a call and wrap the outcome in an envelope.
    ///
    /// A 2xx response with a JSON body yields `success: true` with the decoded
    /// body. Anything else, including an empty body, yields `success: false`
    /// with the error message and status 500.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn call(&self, request: ApiRequest) -> ApiResponse<Value> {
        match self.try_call(&request).await {
            Ok((status, data)) => {
                tracing::debug!(status, "API call succeeded");
                ApiResponse::ok(data, status)
            }
            Err(e) => {
                tracing::error!(error = %e, "API call failed");
                ApiResponse::failure(e.to_string(), e.status_code())
            }
        }
    }

    async fn try_call(&self, request: &ApiRequest) -> Result<(u16, Value), ApiError> {
        let base_url = request
            .base_url
            .as_deref()
            .map_or(self.inner.base_url.as_str(), |b| b.trim_end_matches('/'));
        let full_url = format!("{base_url}{}", request.url);

        let mut builder = self
            .inner
            .client
            .request(request.method.as_reqwest(), &full_url)
            .headers(build_headers(&request.headers)?);

        if request.method.has_body()
            && let Some(payload) = &request.payload
        {
            builder = builder.json(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let data = serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok((status.as_u16(), data))
    }
}

/// `Content-Type: application/json` followed by the caller's headers, which
/// may override it.
fn build_headers(extra: &[(String, String)]) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(name.clone()))?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
