use tracing::info;

use crate::domains::analysis::errors::AnalysisError;
use crate::domains::analysis::models::{AnalyzeRequest, AnalyzeResponse};
use crate::domains::analysis::pipeline::analyze_articles;
use crate::kernel::{NewsQuery, ServerDeps};

/// Fetch articles for a topic and summarize them per source.
///
/// Trims and validates the topic, clamps the page size, then runs the
/// scoring pipeline over whatever the news source returns.
pub async fn analyze_topic(
    request: AnalyzeRequest,
    deps: &ServerDeps,
) -> Result<AnalyzeResponse, AnalysisError> {
    let topic = request.topic.trim().to_string();
    if topic.is_empty() {
        return Err(AnalysisError::TopicRequired);
    }

    let query = NewsQuery {
        topic: topic.clone(),
        language: request.language.clone(),
        page_size: request.clamped_page_size(),
    };

    info!(topic = %query.topic, language = %query.language, page_size = query.page_size, "Analyzing topic");

    let articles = deps.news_source.fetch_articles(&query).await?;

    if articles.is_empty() {
        info!(topic = %topic, "No articles found");
        return Ok(AnalyzeResponse {
            topic,
            language: request.language,
            sources: Vec::new(),
        });
    }

    let sources = analyze_articles(&articles, deps.sentiment.as_ref());

    info!(
        topic = %topic,
        articles = articles.len(),
        sources = sources.len(),
        "Topic analysis complete"
    );

    Ok(AnalyzeResponse {
        topic,
        language: request.language,
        sources,
    })
}
