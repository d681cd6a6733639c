//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod news_source;
pub mod sentiment;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use news_source::NewsApiAdapter;
pub use sentiment::VaderSentimentScorer;
pub use test_dependencies::{MockNewsSource, MockSentimentScorer, TestDependencies};
pub use traits::*;
