//! Text analysis module for Concord.
//!
//! This module provides sentence segmentation and tokenization: the two
//! lexical passes every document goes through before any counting happens.

pub mod sentence;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use sentence::*;
pub use token::*;
pub use tokenizer::*;
