//! Groups scored articles by source and reduces each group to a summary.

use indexmap::IndexMap;

use super::lexicon::political_lean;
use super::models::{ScoredArticle, SourceAccumulator, SourceSummary};

/// Accumulators for one analysis run, keyed by source id in first-seen order.
#[derive(Debug, Default)]
pub struct SourceAggregator {
    accumulators: IndexMap<String, SourceAccumulator>,
}

impl SourceAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one article into its source. The first name seen for an id sticks.
    pub fn fold(&mut self, article: ScoredArticle) {
        let ScoredArticle {
            source_id,
            source_name,
            score,
        } = article;

        self.accumulators
            .entry(source_id)
            .or_insert_with(|| SourceAccumulator::new(source_name))
            .record(&score);
    }

    pub fn get(&self, source_id: &str) -> Option<&SourceAccumulator> {
        self.accumulators.get(source_id)
    }

    pub fn source_count(&self) -> usize {
        self.accumulators.len()
    }

    /// One summary per source with at least one article, in first-seen order.
    pub fn into_summaries(self) -> Vec<SourceSummary> {
        self.accumulators
            .iter()
            .filter_map(|(id, acc)| acc.summarize(id, political_lean(id)))
            .collect()
    }
}

/// Fold a batch of scored articles into per-source summaries.
pub fn aggregate<I>(articles: I) -> Vec<SourceSummary>
where
    I: IntoIterator<Item = ScoredArticle>,
{
    let mut aggregator = SourceAggregator::new();
    for article in articles {
        aggregator.fold(article);
    }
    aggregator.into_summaries()
}
