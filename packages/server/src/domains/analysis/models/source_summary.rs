use serde::{Deserialize, Serialize};

use super::{ArticleScore, Emotion, EmotionCounts, PoliticalLean};

/// Working state for one source during a single analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceAccumulator {
    pub name: String,
    pub sentiments: Vec<f64>,
    pub subjectivities: Vec<f64>,
    pub emotion_counts: EmotionCounts,
}

impl SourceAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sentiments: Vec::new(),
            subjectivities: Vec::new(),
            emotion_counts: EmotionCounts::new(),
        }
    }

    pub fn record(&mut self, score: &ArticleScore) {
        self.sentiments.push(score.sentiment);
        self.subjectivities.push(score.subjectivity);
        self.emotion_counts.increment(score.emotion);
    }

    pub fn article_count(&self) -> usize {
        self.sentiments.len()
    }

    /// Reduce to a summary. `None` if nothing was recorded.
    pub fn summarize(&self, id: &str, political_lean: PoliticalLean) -> Option<SourceSummary> {
        let article_count = self.article_count();
        if article_count == 0 {
            return None;
        }

        let neutral = self.emotion_counts.get(Emotion::Neutral);

        Some(SourceSummary {
            id: id.to_string(),
            name: self.name.clone(),
            political_lean,
            article_count,
            avg_sentiment: mean(&self.sentiments),
            avg_subjectivity: mean(&self.subjectivities),
            dominant_emotion: self.emotion_counts.dominant(),
            emotion_intensity: (article_count - neutral) as f64 / article_count as f64,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-publisher result of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub id: String,
    pub name: String,
    pub political_lean: PoliticalLean,
    pub article_count: usize,
    pub avg_sentiment: f64,
    pub avg_subjectivity: f64,
    pub dominant_emotion: Emotion,
    /// Share of articles with a non-neutral emotion
    pub emotion_intensity: f64,
}
