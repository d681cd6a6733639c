use super::models::SourceSummary;

/// Order summaries by article count, highest first. Equal counts keep their input order.
pub fn rank_by_volume(mut summaries: Vec<SourceSummary>) -> Vec<SourceSummary> {
    // sort_by is stable
    summaries.sort_by(|a, b| b.article_count.cmp(&a.article_count));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::analysis::models::{Emotion, PoliticalLean};

    fn summary(id: &str, article_count: usize) -> SourceSummary {
        SourceSummary {
            id: id.to_string(),
            name: id.to_string(),
            political_lean: PoliticalLean::Unknown,
            article_count,
            avg_sentiment: 0.0,
            avg_subjectivity: 0.0,
            dominant_emotion: Emotion::Neutral,
            emotion_intensity: 0.0,
        }
    }

    #[test]
    fn test_descending_by_count() {
        let ranked = rank_by_volume(vec![summary("a", 1), summary("b", 5), summary("c", 3)]);
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_by_volume(vec![
            summary("first", 2),
            summary("big", 4),
            summary("second", 2),
            summary("third", 2),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["big", "first", "second", "third"]);
    }
}
