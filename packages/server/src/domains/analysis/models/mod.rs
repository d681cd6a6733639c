pub mod analyze;
pub mod article;
pub mod emotion;
pub mod political_lean;
pub mod source_summary;

pub use analyze::*;
pub use article::*;
pub use emotion::*;
pub use political_lean::*;
pub use source_summary::*;
