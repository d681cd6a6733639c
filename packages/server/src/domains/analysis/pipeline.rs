//! Batch scoring: composed text → per-article scores → ranked source summaries.

use tracing::debug;

use super::aggregator::SourceAggregator;
use super::features::{emotion_label, subjectivity_score, tokens};
use super::models::{Article, ArticleScore, ScoredArticle, SourceSummary};
use super::ranker::rank_by_volume;
use crate::kernel::BaseSentimentScorer;

/// Score one piece of composed text.
pub fn score_text(text: &str, scorer: &dyn BaseSentimentScorer) -> ArticleScore {
    let tokens = tokens(text);

    ArticleScore {
        sentiment: scorer.compound(text),
        subjectivity: subjectivity_score(&tokens),
        emotion: emotion_label(&tokens),
    }
}

/// Score an article and tag it with its source. `None` when the article has no text.
pub fn score_article(article: &Article, scorer: &dyn BaseSentimentScorer) -> Option<ScoredArticle> {
    let text = article.composed_text()?;

    Some(ScoredArticle {
        source_id: article.resolved_source_id(),
        source_name: article.resolved_source_name(),
        score: score_text(&text, scorer),
    })
}

/// Run one analysis batch. Each call owns its own accumulators.
pub fn analyze_articles(articles: &[Article], scorer: &dyn BaseSentimentScorer) -> Vec<SourceSummary> {
    let mut aggregator = SourceAggregator::new();
    let mut skipped = 0usize;

    for article in articles {
        match score_article(article, scorer) {
            Some(scored) => aggregator.fold(scored),
            None => skipped += 1,
        }
    }

    debug!(
        articles = articles.len(),
        skipped,
        sources = aggregator.source_count(),
        "Aggregated article scores"
    );

    rank_by_volume(aggregator.into_summaries())
}
