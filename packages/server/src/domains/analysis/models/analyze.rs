use serde::{Deserialize, Serialize};

use super::SourceSummary;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE_SIZE: i64 = 40;
pub const MIN_PAGE_SIZE: i64 = 5;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub topic: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl AnalyzeRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            language: default_language(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size forced into the accepted range.
    pub fn clamped_page_size(&self) -> u32 {
        self.page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub topic: String,
    pub language: String,
    pub sources: Vec<SourceSummary>,
}
