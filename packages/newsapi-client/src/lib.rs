//! Pure NewsAPI REST client.
//!
//! A minimal client for the NewsAPI `/v2/everything` search endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use newsapi_client::{EverythingQuery, NewsApiClient};
//!
//! let client = NewsApiClient::new("your-api-key".into())?;
//!
//! let articles = client.everything(&EverythingQuery::new("climate", "en", 40)).await?;
//! for article in &articles {
//!     println!("{}", article.title.as_deref().unwrap_or("(untitled)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{NewsApiError, Result};
pub use types::{Article, ArticleSource, EverythingQuery, EverythingResponse, SortBy};

use std::time::Duration;

use types::{ErrorBody, EverythingParams};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Upstream request timeout used when none is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct NewsApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_BASE_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Build a client against a custom base URL (e.g. a local stub) with a request timeout.
    pub fn with_options(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search all articles matching a query, newest first by default.
    pub async fn everything(&self, query: &EverythingQuery) -> Result<Vec<Article>> {
        let url = format!("{}/everything", self.base_url);
        let params = EverythingParams {
            q: &query.q,
            language: &query.language,
            page_size: query.page_size,
            sort_by: query.sort_by,
            api_key: &self.api_key,
        };

        tracing::debug!(q = %query.q, language = %query.language, page_size = query.page_size, "Requesting NewsAPI everything");

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(NewsApiError::Network)?;

        let status = resp.status();
        let body = resp.text().await.map_err(NewsApiError::Network)?;

        if !status.is_success() {
            return Err(NewsApiError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let articles = parse_everything(&body)?;
        tracing::debug!(count = articles.len(), "Fetched NewsAPI articles");

        Ok(articles)
    }
}

/// Decode a successful `/everything` body, enforcing `status == "ok"`.
pub fn parse_everything(body: &str) -> Result<Vec<Article>> {
    let response: EverythingResponse =
        serde_json::from_str(body).map_err(|e| NewsApiError::Parse(e.to_string()))?;

    if response.status.as_deref() != Some("ok") {
        return Err(NewsApiError::Status(
            response
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    Ok(response.articles.unwrap_or_default())
}

/// Pull `message` out of an error body, if the body is JSON and has one.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}
