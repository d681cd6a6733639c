//! Server dependencies for activities (using traits for testability)
//!
//! This module provides the central dependency container used by the analysis
//! domain. External services use trait abstractions to enable testing.

use std::sync::Arc;

use crate::kernel::{BaseNewsSource, BaseSentimentScorer};

/// Server dependencies accessible to activities (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Article search provider (NewsAPI in production)
    pub news_source: Arc<dyn BaseNewsSource>,
    /// Compound polarity scorer
    pub sentiment: Arc<dyn BaseSentimentScorer>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        news_source: Arc<dyn BaseNewsSource>,
        sentiment: Arc<dyn BaseSentimentScorer>,
    ) -> Self {
        Self {
            news_source,
            sentiment,
        }
    }
}
