// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (grouping, ranking) lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseNewsSource, BaseSentimentScorer)

use async_trait::async_trait;
use thiserror::Error;

use crate::domains::analysis::models::Article;

// =============================================================================
// News Source Trait (Infrastructure - article search)
// =============================================================================

/// Search parameters handed to a news source. `page_size` is already clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub topic: String,
    pub language: String,
    pub page_size: u32,
}

/// Provider-agnostic failures at the article retrieval boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NewsSourceError {
    /// Network failure or timeout
    #[error("News provider unreachable: {0}")]
    Unreachable(String),

    /// Provider answered with a non-success HTTP status
    #[error("News provider returned HTTP {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// Provider answered 2xx but reported an error in the payload
    #[error("News provider error: {0}")]
    Provider(String),

    /// Payload could not be decoded
    #[error("News provider payload malformed: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait BaseNewsSource: Send + Sync {
    /// Fetch up to `query.page_size` articles about `query.topic`.
    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsSourceError>;
}

// =============================================================================
// Sentiment Scorer Trait (Infrastructure - polarity)
// =============================================================================

/// Compound polarity scorer. Synchronous and in-process.
pub trait BaseSentimentScorer: Send + Sync {
    /// Overall polarity in [-1, 1]. Must not fail; empty text scores 0.0.
    fn compound(&self, text: &str) -> f64;
}
