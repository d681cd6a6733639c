//! Text features computed per article: tokens, subjectivity and emotion.

pub mod emotion;
pub mod subjectivity;
pub mod tokenizer;

pub use emotion::emotion_label;
pub use subjectivity::subjectivity_score;
pub use tokenizer::{tokenize, tokens};
