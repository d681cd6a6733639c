use async_trait::async_trait;
use newsapi_client::{EverythingQuery, NewsApiClient, NewsApiError};

use super::{BaseNewsSource, NewsQuery, NewsSourceError};
use crate::domains::analysis::models::Article;

/// Wrapper around NewsApiClient that implements BaseNewsSource trait
pub struct NewsApiAdapter(pub NewsApiClient);

impl NewsApiAdapter {
    pub fn new(client: NewsApiClient) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseNewsSource for NewsApiAdapter {
    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsSourceError> {
        let request = EverythingQuery::new(&query.topic, &query.language, query.page_size);

        let articles = self.0.everything(&request).await.map_err(|e| {
            tracing::warn!(error = %e, topic = %query.topic, "NewsAPI request failed");
            NewsSourceError::from(e)
        })?;

        Ok(articles.into_iter().map(Article::from).collect())
    }
}

impl From<NewsApiError> for NewsSourceError {
    fn from(err: NewsApiError) -> Self {
        match err {
            NewsApiError::Network(e) => NewsSourceError::Unreachable(e.to_string()),
            NewsApiError::Config(message) => NewsSourceError::Unreachable(message),
            NewsApiError::Api { status, message } => NewsSourceError::Http { status, message },
            NewsApiError::Status(message) => NewsSourceError::Provider(message),
            NewsApiError::Parse(message) => NewsSourceError::Malformed(message),
        }
    }
}

impl From<newsapi_client::Article> for Article {
    fn from(article: newsapi_client::Article) -> Self {
        let source = article.source.unwrap_or_default();

        Self {
            source_id: source.id,
            source_name: source.name,
            title: article.title,
            description: article.description,
            content: article.content,
        }
    }
}
