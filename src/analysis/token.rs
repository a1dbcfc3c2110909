//! Token types for text analysis.
//!
//! A [`Token`] is a single unit of text produced by a tokenizer. Tokens keep
//! their original casing; [`Token::normalized`] derives the lowercase form
//! used for all indexing and search operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token produced by tokenizing one sentence.
///
/// # Examples
///
/// ```
/// use concord::analysis::token::Token;
///
/// let token = Token::with_offsets("Hello", 0, 0, 5);
/// assert_eq!(token.text, "Hello");
/// assert_eq!(token.normalized(), "hello");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token, original casing preserved
    pub text: String,

    /// The position of the token within its sentence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the sentence
    pub start_offset: usize,

    /// The byte offset where this token ends in the sentence
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// The lowercase form used for case-insensitive lookup and counting.
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
