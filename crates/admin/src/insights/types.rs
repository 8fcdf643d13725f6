//! Types for the OpenAI-compatible chat completions API.

use serde::{Deserialize, Serialize};

/// A chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant".
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    #[must_use]
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Request body for a chat completion.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Response body of a chat completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// Text of the first choice, if non-empty.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// What an insights request analyzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Dashboard,
    Product,
    Customer,
}

impl InsightKind {
    /// Sent as the `X-Title` header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard Analytics",
            Self::Product => "Product Analytics",
            Self::Customer => "Customer Analytics",
        }
    }

    #[must_use]
    pub const fn system_prompt(self) -> &'static str {
        match self {
            Self::Dashboard => {
                "You are a business analytics expert. Provide clear, actionable insights based on dashboard data."
            }
            Self::Product => {
                "You are a product analytics expert. Analyze product performance and provide actionable recommendations."
            }
            Self::Customer => {
                "You are a customer analytics expert. Analyze customer data and provide strategic recommendations."
            }
        }
    }

    #[must_use]
    pub const fn max_tokens(self) -> u32 {
        match self {
            Self::Dashboard => 1000,
            Self::Product | Self::Customer => 800,
        }
    }

    /// Error reported when no API key is configured.
    #[must_use]
    pub const fn missing_key_message(self) -> &'static str {
        match self {
            Self::Dashboard => {
                "API key required for AI analytics. Please configure your OpenRouter API key."
            }
            Self::Product | Self::Customer => "API key required for AI analytics",
        }
    }

    /// Recommendations used when the completion names none.
    #[must_use]
    pub const fn default_recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Dashboard => &[
                "Continue monitoring key metrics",
                "Focus on customer acquisition",
                "Optimize product performance",
            ],
            Self::Product => &[
                "Monitor top-performing products",
                "Review underperforming items",
                "Optimize pricing strategy",
            ],
            Self::Customer => &[
                "Implement customer segmentation",
                "Develop retention programs",
                "Personalize customer experience",
            ],
        }
    }
}

/// Result of an insights request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InsightsResponse {
    #[must_use]
    pub const fn ok(insights: String, recommendations: Vec<String>) -> Self {
        Self {
            success: true,
            insights: Some(insights),
            recommendations,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            insights: None,
            recommendations: Vec::new(),
            error: Some(error.into()),
        }
    }
}
