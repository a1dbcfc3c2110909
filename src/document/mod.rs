//! Document access and per-document metrics.

pub mod document;
pub mod index;

// Re-export commonly used types
pub use document::*;
pub use index::*;
