use std::fmt;

use serde::{Deserialize, Serialize};

/// Emotion label attached to an article or a source.
///
/// Declaration order is the tie-break priority: when counts are equal the
/// earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Fear,
    Anger,
    Joy,
    Neutral,
}

impl Emotion {
    /// Keyword-backed categories, in priority order.
    pub const CATEGORIES: [Emotion; 3] = [Emotion::Fear, Emotion::Anger, Emotion::Joy];

    /// Every label an accumulator tracks, in priority order.
    pub const ALL: [Emotion; 4] = [
        Emotion::Fear,
        Emotion::Anger,
        Emotion::Joy,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Fear => "fear",
            Emotion::Anger => "anger",
            Emotion::Joy => "joy",
            Emotion::Neutral => "neutral",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running count per emotion label. All four labels start at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionCounts([usize; 4]);

impl EmotionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, emotion: Emotion) {
        self.0[emotion.index()] += 1;
    }

    pub fn get(&self, emotion: Emotion) -> usize {
        self.0[emotion.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Label with the highest count; ties go to the earlier label in `Emotion::ALL`.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::Fear;
        for emotion in Emotion::ALL {
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, usize)> + '_ {
        Emotion::ALL.into_iter().map(|e| (e, self.get(e)))
    }
}
