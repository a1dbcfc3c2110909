//! Pattern-based tokenizer implementing the fixed lexical grammar.
//!
//! The grammar recognizes capital-letter abbreviation groups, words with
//! internal hyphens or apostrophes, and optional-dollar numeric literals with
//! an optional trailing percent sign. Alternatives are tried in priority
//! order at each scan position (the regex engine's leftmost-first alternation
//! semantics), and characters matched by no alternative are dropped.

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{ConcordError, Result};

/// Grammar matching words of interest; most punctuation is dropped.
const DROPPING_PATTERN: &str = r"(?x)
    (?:[A-Z]\.)+            # abbreviations, e.g. U.S.A.
    | \w+(?:['-]\w+)*       # words with internal hyphens or apostrophes
    | \$?\d+(?:[.,]\d+)?%?  # currency and percentages, e.g. $12.40, 82%
";

/// Stricter grammar that also emits punctuation as standalone tokens.
const STANDALONE_PATTERN: &str = r#"(?x)
    (?:[A-Z]\.)+            # abbreviations, e.g. U.S.A.
    | \w+(?:-\w+)*          # words with internal hyphens
    | \$?\d+(?:[.,]\d+)?%?  # currency and percentages, e.g. $12.40, 82%
    | \.\.\.                # ellipsis
    | [\[\].,;"'?():\-_`]   # single punctuation characters as tokens
"#;

/// Selects which lexical grammar a [`PatternTokenizer`] applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPattern {
    /// Default grammar: unmatched punctuation is dropped, not emitted.
    #[default]
    Dropping,
    /// Strict grammar: punctuation and ellipses become standalone tokens.
    Standalone,
}

impl TokenPattern {
    /// The regex source for this grammar.
    pub fn pattern(&self) -> &'static str {
        match self {
            TokenPattern::Dropping => DROPPING_PATTERN,
            TokenPattern::Standalone => STANDALONE_PATTERN,
        }
    }
}

/// A regex-based tokenizer that extracts tokens matching the lexical grammar.
#[derive(Clone, Debug)]
pub struct PatternTokenizer {
    /// The compiled grammar used to extract tokens
    pattern: Arc<Regex>,
    /// Which grammar variant this tokenizer was built with
    kind: TokenPattern,
}

impl PatternTokenizer {
    /// Create a tokenizer with the default (dropping) grammar.
    pub fn new() -> Result<Self> {
        Self::with_pattern(TokenPattern::Dropping)
    }

    /// Create a tokenizer with the given grammar variant.
    pub fn with_pattern(kind: TokenPattern) -> Result<Self> {
        let regex = Regex::new(kind.pattern())
            .map_err(|e| ConcordError::analysis(format!("Invalid token pattern: {e}")))?;

        Ok(PatternTokenizer {
            pattern: Arc::new(regex),
            kind,
        })
    }

    /// Get the grammar variant this tokenizer applies.
    pub fn kind(&self) -> TokenPattern {
        self.kind
    }
}

impl Default for PatternTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}

impl Tokenizer for PatternTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        match self.kind {
            TokenPattern::Dropping => "pattern",
            TokenPattern::Standalone => "pattern-standalone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &PatternTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_simple_words() {
        let tokenizer = PatternTokenizer::new().unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
    }

    #[test]
    fn test_contractions_and_compounds() {
        let tokenizer = PatternTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "I'm a well-known name"),
            vec!["I'm", "a", "well-known", "name"]
        );
    }

    #[test]
    fn test_abbreviations() {
        let tokenizer = PatternTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "The U.S.A. is large"),
            vec!["The", "U.S.A.", "is", "large"]
        );
    }

    #[test]
    fn test_currency_literals() {
        let tokenizer = PatternTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "It costs $12.40 now"), vec![
            "It", "costs", "$12.40", "now"
        ]);
    }

    #[test]
    fn test_punctuation_is_dropped() {
        let tokenizer = PatternTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "Look, before you go..."), vec![
            "Look", "before", "you", "go"
        ]);
    }

    #[test]
    fn test_standalone_grammar_emits_punctuation() {
        let tokenizer = PatternTokenizer::with_pattern(TokenPattern::Standalone).unwrap();
        assert_eq!(texts(&tokenizer, "Look, before you go..."), vec![
            "Look", ",", "before", "you", "go", "..."
        ]);
    }

    #[test]
    fn test_standalone_grammar_splits_contractions() {
        // The strict grammar keeps hyphens inside words but not apostrophes.
        let tokenizer = PatternTokenizer::with_pattern(TokenPattern::Standalone).unwrap();
        assert_eq!(texts(&tokenizer, "I'm well-known"), vec![
            "I", "'", "m", "well-known"
        ]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = PatternTokenizer::new().unwrap();
        assert!(texts(&tokenizer, "").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(PatternTokenizer::new().unwrap().name(), "pattern");
        assert_eq!(
            PatternTokenizer::with_pattern(TokenPattern::Standalone)
                .unwrap()
                .name(),
            "pattern-standalone"
        );
    }
}
