//! Client for AI-generated business insights.
//!
//! Talks to an OpenAI-compatible chat completions endpoint (OpenRouter by
//! default). Like the dashboard API client, the public methods never fail:
//! every outcome is folded into an [`InsightsResponse`].

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::instrument;

use crate::config::InsightsConfig;
use crate::models::{Product, User};
use crate::state::DashboardSummary;

use super::error::InsightsError;
use super::types::{ChatMessage, ChatRequest, ChatResponse, InsightKind, InsightsResponse};

const TEMPERATURE: f32 = 0.7;

/// AI insights client.
#[derive(Clone)]
pub struct InsightsClient {
    inner: Arc<InsightsClientInner>,
}

struct InsightsClientInner {
    client: reqwest::Client,
    config: InsightsConfig,
}

impl std::fmt::Debug for InsightsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightsClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl InsightsClient {
    /// Create a new insights client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: InsightsConfig) -> Result<Self, InsightsError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: Arc::new(InsightsClientInner { client, config }),
        })
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.config.api_key.is_some()
    }

    /// Analyze the headline dashboard figures.
    pub async fn dashboard_insights(&self, summary: &DashboardSummary) -> InsightsResponse {
        let prompt = format!(
            "Analyze the following dashboard data and provide actionable business insights:\n\n\
             Dashboard Metrics:\n\
             - Total Earning: ${}\n\
             - Orders: {}\n\
             - Customers: {}\n\
             - Products: {}\n\n\
             Please provide:\n\
             1. Key performance insights\n\
             2. Trends analysis\n\
             3. Actionable recommendations for business growth\n\
             4. Areas that need attention\n\n\
             Format your response as a structured analysis with clear sections.",
            summary.total_earning,
            summary.total_orders,
            summary.total_customers,
            summary.total_products,
        );
        self.analyze(InsightKind::Dashboard, Ok(prompt)).await
    }

    /// Analyze product performance.
    pub async fn product_insights(&self, products: &[Product]) -> InsightsResponse {
        let prompt = pretty_json(products).map(|data| {
            format!(
                "Analyze the following product data and provide insights:\n\n\
                 Products: {data}\n\n\
                 Please analyze:\n\
                 1. Best performing products\n\
                 2. Products that need attention\n\
                 3. Pricing optimization opportunities\n\
                 4. Inventory management recommendations"
            )
        });
        self.analyze(InsightKind::Product, prompt).await
    }

    /// Analyze customer behavior.
    pub async fn customer_insights(&self, customers: &[User]) -> InsightsResponse {
        let prompt = pretty_json(customers).map(|data| {
            format!(
                "Analyze customer behavior and order patterns:\n\n\
                 Customer Data: {data}\n\n\
                 Provide insights on:\n\
                 1. Customer segmentation opportunities\n\
                 2. Purchase behavior patterns\n\
                 3. Retention strategies\n\
                 4. Revenue optimization recommendations"
            )
        });
        self.analyze(InsightKind::Customer, prompt).await
    }

    #[instrument(skip(self, prompt), fields(model = %self.inner.config.model))]
    async fn analyze(
        &self,
        kind: InsightKind,
        prompt: Result<String, InsightsError>,
    ) -> InsightsResponse {
        let Some(api_key) = &self.inner.config.api_key else {
            return InsightsResponse::failure(kind.missing_key_message());
        };

        let result = match prompt {
            Ok(prompt) => self.complete(api_key, kind, &prompt).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(insights) => {
                let recommendations = extract_recommendations(&insights)
                    .unwrap_or_else(|| to_owned_list(kind.default_recommendations()));
                InsightsResponse::ok(insights, recommendations)
            }
            Err(e) => {
                tracing::error!(error = %e, "AI analytics request failed");
                InsightsResponse::failure(e.to_string())
            }
        }
    }

    async fn complete(
        &self,
        api_key: &SecretString,
        kind: InsightKind,
        prompt: &str,
    ) -> Result<String, InsightsError> {
        let config = &self.inner.config;
        let request = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage::system(kind.system_prompt()),
                ChatMessage::user(prompt),
            ],
            temperature: TEMPERATURE,
            max_tokens: kind.max_tokens(),
        };

        let response = self
            .inner
            .client
            .post(&config.endpoint)
            .bearer_auth(api_key.expose_secret())
            .headers(build_headers(&config.site_url, kind)?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let completion: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| InsightsError::Parse(format!("Failed to parse response: {e}")))?;
        completion
            .first_text()
            .map(ToOwned::to_owned)
            .ok_or(InsightsError::EmptyCompletion)
    }
}

fn build_headers(site_url: &str, kind: InsightKind) -> Result<HeaderMap, InsightsError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "HTTP-Referer",
        HeaderValue::from_str(site_url).map_err(|_| InsightsError::InvalidHeader("HTTP-Referer"))?,
    );
    headers.insert("X-Title", HeaderValue::from_static(kind.title()));
    Ok(headers)
}

fn pretty_json<T: Serialize + ?Sized>(data: &T) -> Result<String, InsightsError> {
    serde_json::to_string_pretty(data).map_err(|e| InsightsError::Parse(e.to_string()))
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Pull recommendation paragraphs out of a completion.
///
/// Paragraphs are separated by blank lines; those mentioning
/// "recommendation" are kept with any leading `1. ` numbering removed.
/// Returns `None` when there are none.
#[must_use]
pub fn extract_recommendations(insights: &str) -> Option<Vec<String>> {
    let found: Vec<String> = insights
        .split("\n\n")
        .filter(|section| section.to_lowercase().contains("recommendation"))
        .map(|section| strip_list_number(section).trim().to_string())
        .collect();
    (!found.is_empty()).then_some(found)
}

fn strip_list_number(section: &str) -> &str {
    let rest = section.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == section.len() {
        return section;
    }
    rest.strip_prefix('.').map_or(section, str::trim_start)
}

/// Canned insights for offline use.
#[must_use]
pub fn mock_insights() -> InsightsResponse {
    let insights = "\
## Dashboard Performance Analysis

### Key Insights:
- **Revenue Growth**: Your total earnings of $981.35 show steady performance
- **Order Volume**: 65,802 orders indicate strong customer demand
- **Customer Base**: 79,958 customers represent a healthy user base
- **Product Portfolio**: 367 products provide good variety

### Recommendations:
1. **Focus on High-Value Customers**: Implement loyalty programs for repeat buyers
2. **Optimize Product Mix**: Analyze top-performing products and expand similar offerings
3. **Improve Conversion**: Work on converting more visitors to customers
4. **Seasonal Planning**: Prepare inventory for peak seasons based on order patterns

### Areas for Attention:
- Monitor customer acquisition costs
- Track product performance metrics
- Optimize pricing strategies
- Enhance customer retention programs
";
    InsightsResponse::ok(
        insights.to_string(),
        to_owned_list(&[
            "Implement customer loyalty programs",
            "Optimize high-performing product categories",
            "Improve customer acquisition strategies",
            "Enhance inventory management systems",
        ]),
    )
}

/// Models known to work with the insights prompts.
#[must_use]
pub const fn supported_models() -> &'static [&'static str] {
    &[
        "anthropic/claude-sonnet-4",
        "openai/gpt-4o",
        "openai/gpt-4o-mini",
        "meta-llama/llama-3.1-8b-instruct",
    ]
}
