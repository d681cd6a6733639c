//! Static word lists and the publisher bias table.
//!
//! Built once on first access and read concurrently without locking.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use super::models::{Emotion, PoliticalLean};

/// Key in `SOURCE_BIAS` holding the fallback lean.
pub const DEFAULT_BIAS_KEY: &str = "default";

lazy_static! {
    /// Opinion-signaling words used by the subjectivity scorer.
    pub static ref SUBJECTIVE_WORDS: HashSet<&'static str> = [
        "think", "believe", "feel", "should", "must", "maybe", "probably", "personally",
        "seems", "appears", "opinion", "suggest", "claim", "argue", "i", "we", "you",
    ]
    .into_iter()
    .collect();

    static ref FEAR_WORDS: HashSet<&'static str> = [
        "fear", "afraid", "scared", "terror", "panic", "threat", "worry", "worried",
        "concern", "concerned", "anxiety", "anxious", "risk",
    ]
    .into_iter()
    .collect();

    static ref ANGER_WORDS: HashSet<&'static str> = [
        "angry", "rage", "furious", "outrage", "hate", "hateful", "attack", "blame",
        "corrupt", "corruption", "fraud", "scam",
    ]
    .into_iter()
    .collect();

    static ref JOY_WORDS: HashSet<&'static str> = [
        "happy", "joy", "joyful", "celebrate", "win", "victory", "success", "growth",
        "optimistic", "hope", "hopeful", "progress",
    ]
    .into_iter()
    .collect();

    /// Source id → political lean. `"default"` carries the fallback.
    pub static ref SOURCE_BIAS: HashMap<&'static str, PoliticalLean> = [
        ("fox-news", PoliticalLean::Right),
        ("breitbart-news", PoliticalLean::Right),
        ("the-hindu", PoliticalLean::CenterLeft),
        ("the-times-of-india", PoliticalLean::Center),
        ("bbc-news", PoliticalLean::Center),
        ("cnn", PoliticalLean::CenterLeft),
        ("al-jazeera-english", PoliticalLean::CenterLeft),
        ("reuters", PoliticalLean::Center),
        ("associated-press", PoliticalLean::Center),
        (DEFAULT_BIAS_KEY, PoliticalLean::Unknown),
    ]
    .into_iter()
    .collect();
}

/// Word set for a keyword-backed emotion. `Neutral` has none.
pub fn emotion_words(emotion: Emotion) -> Option<&'static HashSet<&'static str>> {
    match emotion {
        Emotion::Fear => Some(&*FEAR_WORDS),
        Emotion::Anger => Some(&*ANGER_WORDS),
        Emotion::Joy => Some(&*JOY_WORDS),
        Emotion::Neutral => None,
    }
}

pub fn is_subjective(token: &str) -> bool {
    SUBJECTIVE_WORDS.contains(token)
}

/// Look up a source id in the bias table, falling back to the `"default"` entry.
pub fn political_lean(source_id: &str) -> PoliticalLean {
    SOURCE_BIAS
        .get(source_id)
        .or_else(|| SOURCE_BIAS.get(DEFAULT_BIAS_KEY))
        .copied()
        .unwrap_or(PoliticalLean::Unknown)
}
