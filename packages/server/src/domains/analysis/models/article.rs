use serde::{Deserialize, Serialize};

use super::Emotion;

/// Source id used when an article names neither an id nor a publisher.
pub const UNKNOWN_SOURCE_ID: &str = "unknown";

/// Article as handed to the pipeline by a news source. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub source_id: Option<String>,
    pub source_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
}

impl Article {
    /// Effective grouping key: id, else name, else `"unknown"`. Empty strings count as missing.
    pub fn resolved_source_id(&self) -> String {
        non_empty(&self.source_id)
            .or_else(|| non_empty(&self.source_name))
            .unwrap_or(UNKNOWN_SOURCE_ID)
            .to_string()
    }

    /// Display name: the publisher name, else the resolved id.
    pub fn resolved_source_name(&self) -> String {
        match non_empty(&self.source_name) {
            Some(name) => name.to_string(),
            None => self.resolved_source_id(),
        }
    }

    /// Title, description and content joined with `". "`, trimmed.
    ///
    /// Missing or blank parts are skipped. Returns `None` when nothing is left,
    /// which excludes the article from aggregation.
    pub fn composed_text(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.title, &self.description, &self.content]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let text = parts.join(". ");
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Per-article scores. Built once from composed text and folded into exactly one accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleScore {
    /// Compound polarity in [-1, 1]
    pub sentiment: f64,
    /// Share of opinion-signaling tokens in [0, 1]
    pub subjectivity: f64,
    pub emotion: Emotion,
}

/// An article score tagged with the source it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredArticle {
    pub source_id: String,
    pub source_name: String,
    pub score: ArticleScore,
}
