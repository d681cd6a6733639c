// Common test utilities
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
