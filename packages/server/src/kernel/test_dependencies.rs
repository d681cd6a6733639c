// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{
    BaseNewsSource, BaseSentimentScorer, NewsQuery, NewsSourceError, ServerDeps,
    VaderSentimentScorer,
};
use crate::domains::analysis::models::Article;

// =============================================================================
// Mock News Source
// =============================================================================

pub struct MockNewsSource {
    responses: Arc<Mutex<Vec<Result<Vec<Article>, NewsSourceError>>>>,
    calls: Arc<Mutex<Vec<NewsQuery>>>,
}

impl MockNewsSource {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a batch of articles to be returned
    pub fn with_articles(self, articles: Vec<Article>) -> Self {
        self.responses.lock().unwrap().push(Ok(articles));
        self
    }

    /// Queue an error to be returned
    pub fn with_error(self, error: NewsSourceError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Get all queries that were made
    pub fn calls(&self) -> Vec<NewsQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockNewsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNewsSource for MockNewsSource {
    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsSourceError> {
        self.calls.lock().unwrap().push(query.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Vec::new())
        } else {
            responses.remove(0)
        }
    }
}

// =============================================================================
// Mock Sentiment Scorer
// =============================================================================

/// Returns preset scores for exact texts, `default` otherwise.
pub struct MockSentimentScorer {
    scores: HashMap<String, f64>,
    default: f64,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockSentimentScorer {
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
            default: 0.0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_score(mut self, text: &str, score: f64) -> Self {
        self.scores.insert(text.to_string(), score);
        self
    }

    pub fn with_default(mut self, score: f64) -> Self {
        self.default = score;
        self
    }

    /// Texts that were scored, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseSentimentScorer for MockSentimentScorer {
    fn compound(&self, text: &str) -> f64 {
        self.calls.lock().unwrap().push(text.to_string());
        self.scores.get(text).copied().unwrap_or(self.default)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps wired with mocks
pub struct TestDependencies {
    pub news_source: Arc<MockNewsSource>,
    pub sentiment: Arc<dyn BaseSentimentScorer>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            news_source: Arc::new(MockNewsSource::new()),
            sentiment: Arc::new(VaderSentimentScorer::new()),
        }
    }

    pub fn mock_news(mut self, news_source: MockNewsSource) -> Self {
        self.news_source = Arc::new(news_source);
        self
    }

    pub fn mock_sentiment(mut self, scorer: impl BaseSentimentScorer + 'static) -> Self {
        self.sentiment = Arc::new(scorer);
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.news_source.clone(), self.sentiment.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
