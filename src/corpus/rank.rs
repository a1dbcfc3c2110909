//! Frequency ranking filtered by word length.

use serde::{Deserialize, Serialize};

use crate::corpus::index::CorpusIndex;
use crate::error::{ConcordError, Result};

/// An inclusive `[lower, upper]` bound on normalized word length, counted in
/// characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthInterval {
    lower: usize,
    upper: usize,
}

impl LengthInterval {
    /// Create a validated interval. `lower > upper` is rejected with
    /// [`ConcordError::InvalidArgument`] before it can reach the index layer.
    pub fn new(lower: usize, upper: usize) -> Result<Self> {
        if lower > upper {
            return Err(ConcordError::invalid_argument(format!(
                "the lower bound {lower} cannot be greater than the upper bound {upper}"
            )));
        }
        Ok(LengthInterval { lower, upper })
    }

    /// The inclusive lower bound.
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// The inclusive upper bound.
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Check whether a word length falls inside the interval.
    pub fn contains(&self, len: usize) -> bool {
        self.lower <= len && len <= self.upper
    }
}

/// Rank the corpus vocabulary by frequency, keeping words whose length falls
/// within `interval` and truncating to `limit` entries when given.
///
/// This is the pure query boundary consumed by the report renderer; it holds
/// no state of its own.
pub fn most_common_words(
    corpus: &CorpusIndex,
    interval: LengthInterval,
    limit: Option<usize>,
) -> Result<Vec<(String, u64)>> {
    corpus.most_common_words_filtered_by_length(interval, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_interval() {
        let interval = LengthInterval::new(6, 8).unwrap();
        assert_eq!(interval.lower(), 6);
        assert_eq!(interval.upper(), 8);
        assert!(interval.contains(6));
        assert!(interval.contains(7));
        assert!(interval.contains(8));
        assert!(!interval.contains(5));
        assert!(!interval.contains(9));
    }

    #[test]
    fn test_degenerate_interval() {
        let interval = LengthInterval::new(4, 4).unwrap();
        assert!(interval.contains(4));
        assert!(!interval.contains(3));
        assert!(!interval.contains(5));
    }

    #[test]
    fn test_inverted_interval_is_rejected() {
        match LengthInterval::new(8, 6) {
            Err(ConcordError::InvalidArgument(msg)) => {
                assert!(msg.contains('8'));
                assert!(msg.contains('6'));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }
}
