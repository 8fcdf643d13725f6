//! Integration tests for the AI insights client against a stub
//! chat-completions endpoint.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use secrecy::SecretString;
use serde_json::{Value, json};
use storedash_admin::api::mock;
use storedash_admin::config::InsightsConfig;
use storedash_admin::insights::{InsightKind, InsightsClient};
use storedash_admin::state::DashboardSummary;
use storedash_integration_tests::StubServer;

const COMPLETION: &str = "Revenue is steady.\n\n1. Recommendation: run a loyalty program\n\nWatch churn.";

/// Answers with a completion that echoes what the request carried.
fn completions_api() -> Router {
    Router::new()
        .route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                };
                if header("authorization") != "Bearer sk-or-test-4f9a" {
                    return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"})));
                }
                let content = if body["messages"][1]["content"]
                    .as_str()
                    .unwrap_or_default()
                    .contains("Dashboard Metrics")
                {
                    COMPLETION.to_string()
                } else {
                    format!(
                        "title={} referer={} model={} max_tokens={}",
                        header("x-title"),
                        header("http-referer"),
                        body["model"].as_str().unwrap_or_default(),
                        body["max_tokens"]
                    )
                };
                (
                    StatusCode::OK,
                    Json(json!({"choices": [{"message": {"role": "assistant", "content": content}}]})),
                )
            }),
        )
        .route(
            "/v1/empty/completions",
            post(|| async { Json(json!({"choices": []})) }),
        )
}

fn config(server: &StubServer, path: &str, key: &str) -> InsightsConfig {
    InsightsConfig {
        api_key: Some(SecretString::from(key.to_string())),
        endpoint: server.url(path),
        site_url: "https://admin.example.com".to_string(),
        ..InsightsConfig::default()
    }
}

#[tokio::test]
async fn test_dashboard_insights_extracts_recommendations() {
    let server = StubServer::start(completions_api()).await;
    let client =
        InsightsClient::new(config(&server, "/v1/chat/completions", "sk-or-test-4f9a")).unwrap();

    let response = client.dashboard_insights(&DashboardSummary::default()).await;
    assert!(response.success, "{:?}", response.error);
    assert_eq!(response.insights.as_deref(), Some(COMPLETION));
    assert_eq!(
        response.recommendations,
        ["Recommendation: run a loyalty program"]
    );
}

#[tokio::test]
async fn test_product_insights_headers_and_defaults() {
    let server = StubServer::start(completions_api()).await;
    let client =
        InsightsClient::new(config(&server, "/v1/chat/completions", "sk-or-test-4f9a")).unwrap();

    let response = client.product_insights(&mock::products()).await;
    assert!(response.success, "{:?}", response.error);
    assert_eq!(
        response.insights.as_deref(),
        Some(
            "title=Product Analytics referer=https://admin.example.com \
             model=anthropic/claude-sonnet-4 max_tokens=800"
        )
    );
    let defaults: Vec<String> = InsightKind::Product
        .default_recommendations()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(response.recommendations, defaults);
}

#[tokio::test]
async fn test_rejected_key_reports_status() {
    let server = StubServer::start(completions_api()).await;
    let client =
        InsightsClient::new(config(&server, "/v1/chat/completions", "sk-or-wrong")).unwrap();

    let response = client.customer_insights(&[]).await;
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("AI API request failed: 401"));
}

#[tokio::test]
async fn test_empty_completion_is_failure() {
    let server = StubServer::start(completions_api()).await;
    let client =
        InsightsClient::new(config(&server, "/v1/empty/completions", "sk-or-test-4f9a")).unwrap();

    let response = client.dashboard_insights(&DashboardSummary::default()).await;
    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("No insights generated from AI response")
    );
}
