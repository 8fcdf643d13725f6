//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREDASH_API_BASE_URL` - Base URL prepended to API paths (default: http://127.0.0.1:3000/api)
//! - `STOREDASH_LOAD_DELAY_MS` - Simulated page load delay in milliseconds (default: 1000)
//!
//! ## Optional (AI insights)
//! - `OPENROUTER_API_KEY` - Bearer token for the insights endpoint; insights are disabled without it
//! - `OPENROUTER_MODEL` - Model ID (default: anthropic/claude-sonnet-4)
//! - `OPENROUTER_ENDPOINT` - Chat completions URL (default: https://openrouter.ai/api/v1/chat/completions)
//! - `STOREDASH_SITE_URL` - Sent as `HTTP-Referer` (default: http://localhost:3000)

use std::collections::HashMap;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/api";
const DEFAULT_LOAD_DELAY_MS: u64 = 1000;
pub(crate) const DEFAULT_INSIGHTS_MODEL: &str = "anthropic/claude-sonnet-4";
pub(crate) const DEFAULT_INSIGHTS_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "your_",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL prepended to every API path, without a trailing slash
    pub api_base_url: String,
    /// Simulated network delay before a page finishes loading
    pub load_delay: Duration,
    /// AI insights collaborator
    pub insights: InsightsConfig,
}

/// AI insights endpoint configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct InsightsConfig {
    /// Bearer token; `None` disables live insights
    pub api_key: Option<SecretString>,
    /// Model ID (e.g., anthropic/claude-sonnet-4)
    pub model: String,
    /// OpenAI-compatible chat completions URL
    pub endpoint: String,
    /// Sent as the `HTTP-Referer` header
    pub site_url: String,
}

impl std::fmt::Debug for InsightsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("site_url", &self.site_url)
            .finish()
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_INSIGHTS_MODEL.to_string(),
            endpoint: DEFAULT_INSIGHTS_ENDPOINT.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
            insights: InsightsConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = match get("STOREDASH_API_BASE_URL") {
            Some(value) => validate_url("STOREDASH_API_BASE_URL", &value)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let load_delay = match get("STOREDASH_LOAD_DELAY_MS") {
            Some(value) => value.trim().parse::<u64>().map(Duration::from_millis).map_err(|e| {
                ConfigError::InvalidEnvVar("STOREDASH_LOAD_DELAY_MS".to_string(), e.to_string())
            })?,
            None => Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
        };
        let insights = InsightsConfig::from_lookup(&get)?;

        Ok(Self {
            api_base_url,
            load_delay,
            insights,
        })
    }
}

impl InsightsConfig {
    /// Load insights configuration.
    ///
    /// A key that looks like a placeholder or has low entropy is kept but
    /// logged as a warning, since the endpoint is the final judge.
    fn from_lookup(get: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = get("OPENROUTER_API_KEY").map(|key| {
            if let Err(e) = validate_secret_strength(&key, "OPENROUTER_API_KEY") {
                tracing::warn!("OPENROUTER_API_KEY validation warning: {e}");
            }
            SecretString::from(key)
        });
        let endpoint = match get("OPENROUTER_ENDPOINT") {
            Some(value) => validate_url("OPENROUTER_ENDPOINT", &value)?,
            None => DEFAULT_INSIGHTS_ENDPOINT.to_string(),
        };

        Ok(Self {
            api_key,
            model: get("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_INSIGHTS_MODEL.to_string()),
            endpoint,
            site_url: get("STOREDASH_SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string()),
        })
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Check that a value is an absolute http(s) URL, returning it without a
/// trailing slash.
fn validate_url(key: &str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    let url =
        Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(value.trim_end_matches('/').to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}
