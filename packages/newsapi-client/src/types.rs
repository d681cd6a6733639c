use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Sort order accepted by the `/everything` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "publishedAt")]
    PublishedAt,
    #[serde(rename = "relevancy")]
    Relevancy,
    #[serde(rename = "popularity")]
    Popularity,
}

/// Query for `GET /v2/everything`.
#[derive(Debug, Clone)]
pub struct EverythingQuery {
    pub q: String,
    pub language: String,
    pub page_size: u32,
    pub sort_by: SortBy,
}

impl EverythingQuery {
    pub fn new(q: impl Into<String>, language: impl Into<String>, page_size: u32) -> Self {
        Self {
            q: q.into(),
            language: language.into(),
            page_size,
            sort_by: SortBy::default(),
        }
    }
}

/// Wire form of the query string. The API key rides along as `apiKey`.
#[derive(Debug, Serialize)]
pub(crate) struct EverythingParams<'a> {
    pub q: &'a str,
    pub language: &'a str,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "sortBy")]
    pub sort_by: SortBy,
    #[serde(rename = "apiKey")]
    pub api_key: &'a str,
}

/// Publisher reference attached to each article.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A single article from the `/everything` result set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Article {
    pub source: Option<ArticleSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    /// `None` when absent or not RFC 3339; a bad timestamp never fails the batch.
    #[serde(
        rename = "publishedAt",
        default,
        deserialize_with = "lenient_timestamp"
    )]
    pub published_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
}

/// Envelope returned by the API for both success and error payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct EverythingResponse {
    pub status: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<u64>,
    /// Missing and `null` both mean no articles.
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
}

/// Error body shape for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(raw
        .as_ref()
        .and_then(|value| value.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}
