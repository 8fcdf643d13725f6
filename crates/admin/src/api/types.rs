//! Request and response envelope types.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP verb of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Whether requests with this verb carry a JSON body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// A call to the dashboard API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// Path appended to the base URL (`/products`).
    pub url: String,
    /// Overrides the client's base URL for this call.
    #[serde(rename = "baseURL", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub method: HttpMethod,
    /// JSON body, sent only for `POST` and `PUT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Extra headers, applied after `Content-Type: application/json`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a request with the given verb and path.
    #[must_use]
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            url: url.to_string(),
            method,
            ..Self::default()
        }
    }

    /// A `GET` request.
    #[must_use]
    pub fn get(url: &str) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// A `POST` request with a JSON body.
    #[must_use]
    pub fn post(url: &str, payload: Value) -> Self {
        Self::new(HttpMethod::Post, url).payload(payload)
    }

    /// A `PUT` request with a JSON body.
    #[must_use]
    pub fn put(url: &str, payload: Value) -> Self {
        Self::new(HttpMethod::Put, url).payload(payload)
    }

    /// A `DELETE` request.
    #[must_use]
    pub fn delete(url: &str) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// Set the JSON body.
    #[must_use]
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Override the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Uniform result envelope for every API call.
///
/// `success` is true exactly when `data` came from a 2xx response; failures
/// carry a human-readable `error` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl<T> ApiResponse<T> {
    /// A successful envelope.
    #[must_use]
    pub const fn ok(data: T, status: u16) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status: Some(status),
        }
    }

    /// A failed envelope.
    #[must_use]
    pub fn failure(error: impl Into<String>, status: u16) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status: Some(status),
        }
    }
}
