use crate::domains::analysis::lexicon::emotion_words;
use crate::domains::analysis::models::Emotion;

/// Keyword vote across fear/anger/joy.
///
/// A token bumps every category containing it. No hits means `Neutral`;
/// ties resolve in `Emotion::CATEGORIES` order.
pub fn emotion_label<T: AsRef<str>>(tokens: &[T]) -> Emotion {
    let mut counts = [0usize; Emotion::CATEGORIES.len()];

    for token in tokens {
        let token = token.as_ref();
        for (slot, emotion) in Emotion::CATEGORIES.iter().enumerate() {
            if emotion_words(*emotion).is_some_and(|words| words.contains(token)) {
                counts[slot] += 1;
            }
        }
    }

    let mut best: Option<(Emotion, usize)> = None;
    for (emotion, count) in Emotion::CATEGORIES.into_iter().zip(counts) {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((emotion, count)),
        }
    }

    best.map(|(emotion, _)| emotion).unwrap_or(Emotion::Neutral)
}
