//! Error types for the NewsAPI client.

use thiserror::Error;

/// Result type for NewsAPI client operations.
pub type Result<T> = std::result::Result<T, NewsApiError>;

/// NewsAPI client errors.
#[derive(Debug, Error)]
pub enum NewsApiError {
    /// Transport failure (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Non-2xx response. `message` comes from the JSON error body when present.
    #[error("API error (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response whose `status` field was not "ok"
    #[error("API status error: {0}")]
    Status(String),

    /// Body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Client could not be constructed
    #[error("Configuration error: {0}")]
    Config(String),
}
