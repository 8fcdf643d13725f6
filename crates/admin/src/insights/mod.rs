//! AI-generated business insights.
//!
//! [`InsightsClient`] sends dashboard, product or customer data to a chat
//! completions endpoint and returns the analysis with a short list of
//! recommendations. [`mock_insights`] serves the same shape offline.

mod client;
mod error;
mod types;

pub use client::{InsightsClient, extract_recommendations, mock_insights, supported_models};
pub use error::InsightsError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, InsightKind, InsightsResponse};
