use crate::domains::analysis::lexicon::is_subjective;

/// Fraction of tokens found in the subjective word set. Empty input scores `0.0`.
///
/// Repeated words each count.
pub fn subjectivity_score<T: AsRef<str>>(tokens: &[T]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let hits = tokens.iter().filter(|t| is_subjective(t.as_ref())).count();
    hits as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_of_subjective_tokens() {
        let score = subjectivity_score(&["i", "think", "this", "is", "great"]);
        assert!((score - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_is_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(subjectivity_score(&empty), 0.0);
    }

    #[test]
    fn test_repeats_count_individually() {
        assert_eq!(subjectivity_score(&["we", "we", "we", "won"]), 0.75);
    }

    #[test]
    fn test_all_subjective_is_one() {
        assert_eq!(subjectivity_score(&["you", "should", "believe"]), 1.0);
    }
}
