pub mod activities;
pub mod aggregator;
pub mod errors;
pub mod features;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod ranker;

// Re-export commonly used types
pub use activities::analyze_topic;
pub use aggregator::{aggregate, SourceAggregator};
pub use errors::AnalysisError;
pub use models::{
    AnalyzeRequest, AnalyzeResponse, Article, ArticleScore, Emotion, PoliticalLean,
    ScoredArticle, SourceSummary,
};
pub use pipeline::analyze_articles;
pub use ranker::rank_by_volume;
