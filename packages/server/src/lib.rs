// BiasRadar - API Core
//
// Scores news coverage of a topic per publisher: sentiment, subjectivity and
// dominant emotion, aggregated from lexicon heuristics and ranked by volume.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
