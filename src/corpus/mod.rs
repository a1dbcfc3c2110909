//! Cross-document aggregation and frequency ranking.

pub mod index;
pub mod rank;

// Re-export commonly used types
pub use index::*;
pub use rank::*;
