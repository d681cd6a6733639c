//! Analysis domain activities - entry-point business logic called from HTTP routes.

pub mod analyze_topic;

pub use analyze_topic::analyze_topic;
