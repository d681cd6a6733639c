//! In-process compound sentiment scorer backed by the full VADER lexicon.

use vader_sentiment::SentimentIntensityAnalyzer;

use super::BaseSentimentScorer;

/// VADER compound scorer. Stateless; one instance serves every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderSentimentScorer;

impl VaderSentimentScorer {
    pub fn new() -> Self {
        Self
    }
}

impl BaseSentimentScorer for VaderSentimentScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        // The analyzer only borrows the static lexicons, so building one per call is free
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}
