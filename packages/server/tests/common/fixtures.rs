//! Test fixtures for creating articles.

use bias_radar_core::domains::analysis::Article;

/// Article with a source id and display name plus a title.
pub fn article(source_id: &str, source_name: &str, title: &str) -> Article {
    Article {
        source_id: Some(source_id.to_string()),
        source_name: Some(source_name.to_string()),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// Article with every text field filled.
pub fn full_article(
    source_id: &str,
    source_name: &str,
    title: &str,
    description: &str,
    content: &str,
) -> Article {
    Article {
        source_id: Some(source_id.to_string()),
        source_name: Some(source_name.to_string()),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        content: Some(content.to_string()),
    }
}

/// Article with no source information at all.
pub fn anonymous_article(title: &str) -> Article {
    Article {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// Article whose text fields are all missing.
pub fn empty_article(source_id: &str) -> Article {
    Article {
        source_id: Some(source_id.to_string()),
        source_name: Some(source_id.to_string()),
        ..Default::default()
    }
}
