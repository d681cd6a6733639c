use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Letters, numbers and underscore. Combining marks split words.
    static ref WORD_REGEX: Regex = Regex::new(r"[\p{L}\p{N}_]+").unwrap();
}

/// Lowercase the text, then split it into word tokens, dropping punctuation and whitespace.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

/// Collect `tokenize` into a vector.
pub fn tokens(text: &str) -> Vec<String> {
    tokenize(text).collect()
}
