//! # Concord
//!
//! Word-frequency and concordance metrics for small plain-text corpora.
//!
//! ## Features
//!
//! - Rule-based sentence segmentation and a fixed lexical token grammar
//! - Per-document metrics with lazy, memoized derived state
//! - Cross-document aggregation with word-to-document reverse lookup
//! - Frequency ranking filtered by word length
//! - Optional parallel per-document index construction

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod document;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
