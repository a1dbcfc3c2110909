//! Rule-based sentence segmentation.
//!
//! Splits raw document text into sentences on `.`, `!`, and `?` while
//! refusing to split inside abbreviations ("Mr.", "etc.", "U.S.A."), initials
//! ("J. Smith"), decimal numbers ("3.14"), and mid-sentence ellipses. Closing
//! quotes and brackets after a terminator stay attached to the sentence they
//! close.
//!
//! A terminator only ends a sentence when the following non-whitespace
//! character does not continue in lowercase, so "wait... and see" stays one
//! sentence while "Stop... Now" splits.

use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Words whose trailing period never ends a sentence. Dots are stripped
    /// before lookup, so "e.g." and "i.e." are covered by "eg" and "ie".
    static ref ABBREVIATIONS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for abbr in [
            "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "rev", "hon",
            "etc", "vs", "eg", "ie", "cf", "al", "inc", "ltd", "co", "corp",
            "no", "fig", "vol", "ch", "pp", "dept", "est", "approx",
        ] {
            set.insert(abbr);
        }
        set
    };
}

/// Characters that may trail a terminator and still belong to the sentence.
fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')' | ']' | '\u{00bb}')
}

/// Splits text into sentences.
#[derive(Clone, Debug, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Self {
        SentenceSegmenter
    }

    /// Segment the given text into trimmed, non-empty sentences.
    ///
    /// Empty input yields an empty sequence.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let n = chars.len();

        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < n {
            let c = chars[i].1;
            if !matches!(c, '.' | '!' | '?') {
                i += 1;
                continue;
            }

            // Expand a run of terminal punctuation ("...", "?!").
            let mut j = i;
            while j + 1 < n && matches!(chars[j + 1].1, '.' | '!' | '?') {
                j += 1;
            }
            let in_run = j > i;

            if c == '.'
                && !in_run
                && (decimal_point(&chars, i) || abbreviation_dot(&chars, start, i))
            {
                i = j + 1;
                continue;
            }

            // Closing quotes and brackets belong to the finished sentence.
            let mut k = j + 1;
            while k < n && is_closing(chars[k].1) {
                k += 1;
            }

            // The next sentence must start after whitespace and not in
            // lowercase; otherwise this terminator is a continuation.
            let mut m = k;
            while m < n && chars[m].1.is_whitespace() {
                m += 1;
            }
            let splits = m >= n || (m > k && !chars[m].1.is_lowercase());

            if splits {
                let end = if k < n { chars[k].0 } else { text.len() };
                let sentence = text[chars[start].0..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = m;
                i = m;
            } else {
                i = j + 1;
            }
        }

        if start < n {
            let sentence = text[chars[start].0..].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
        }

        sentences
    }
}

/// True when the dot at `i` sits between two digits.
fn decimal_point(chars: &[(usize, char)], i: usize) -> bool {
    i > 0
        && i + 1 < chars.len()
        && chars[i - 1].1.is_ascii_digit()
        && chars[i + 1].1.is_ascii_digit()
}

/// True when the dot at `i` ends an abbreviation or a single initial.
///
/// Dotted capital groups ("U.S.A.") are left to the lookahead rule: their
/// final dot may still end a sentence when a new capitalized sentence
/// follows.
fn abbreviation_dot(chars: &[(usize, char)], start: usize, i: usize) -> bool {
    let mut p = i;
    while p > start && !chars[p - 1].1.is_whitespace() {
        p -= 1;
    }
    let word: String = chars[p..i].iter().map(|(_, c)| *c).collect();
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

    if word.is_empty() {
        return false;
    }

    let mut letters = word.chars().filter(|c| *c != '.');
    if let (Some(first), None) = (letters.next(), letters.next()) {
        // A single letter before the dot is an initial, "J. Smith".
        return first.is_uppercase();
    }

    if word.contains('.') && word.chars().all(|c| c == '.' || c.is_uppercase()) {
        return false;
    }

    let stripped: String = word
        .chars()
        .filter(|c| *c != '.')
        .collect::<String>()
        .to_lowercase();
    ABBREVIATIONS.contains(stripped.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        SentenceSegmenter::new().segment(text)
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n  ").is_empty());
    }

    #[test]
    fn test_single_sentence_without_terminator() {
        assert_eq!(segment("I'm a lonely sentence"), vec![
            "I'm a lonely sentence"
        ]);
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(segment("I know you. You are great!"), vec![
            "I know you.",
            "You are great!"
        ]);
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(segment("Really? Yes! Fine."), vec![
            "Really?", "Yes!", "Fine."
        ]);
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        assert_eq!(segment("Mr. Smith went home. He slept."), vec![
            "Mr. Smith went home.",
            "He slept."
        ]);
    }

    #[test]
    fn test_initial_does_not_split() {
        assert_eq!(segment("J. Smith arrived. We left."), vec![
            "J. Smith arrived.",
            "We left."
        ]);
    }

    #[test]
    fn test_decimal_number_does_not_split() {
        assert_eq!(segment("Pi is about 3.14. Round it up."), vec![
            "Pi is about 3.14.",
            "Round it up."
        ]);
    }

    #[test]
    fn test_dotted_abbreviation_mid_sentence() {
        assert_eq!(segment("The U.S.A. is large. It spans a continent."), vec![
            "The U.S.A. is large.",
            "It spans a continent."
        ]);
    }

    #[test]
    fn test_ellipsis_continuation() {
        assert_eq!(segment("Wait... and see."), vec!["Wait... and see."]);
    }

    #[test]
    fn test_ellipsis_split_before_capital() {
        assert_eq!(segment("Look before you go... You know why."), vec![
            "Look before you go...",
            "You know why."
        ]);
    }

    #[test]
    fn test_closing_quote_stays_attached() {
        assert_eq!(segment("He said \"Stop.\" Then he left."), vec![
            "He said \"Stop.\"",
            "Then he left."
        ]);
    }

    #[test]
    fn test_lowercase_continuation_after_period() {
        // Sentences are expected to start capitalized; a lowercase
        // continuation keeps the text together.
        assert_eq!(segment("he stopped. and waited. Then ran."), vec![
            "he stopped. and waited.",
            "Then ran."
        ]);
    }

    #[test]
    fn test_trailing_terminator() {
        assert_eq!(segment("One sentence only."), vec!["One sentence only."]);
    }
}
