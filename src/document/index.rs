//! Per-document metrics index.
//!
//! [`DocumentIndex`] owns one [`Document`] and derives all of its lexical
//! state on first access: the sentence list, per-sentence token lists, the
//! normalized frequency table, vocabularies, and the word-to-sentence
//! inverted index. Every derived field is computed once and memoized for the
//! lifetime of the index; documents are read-only for the run, so there is no
//! invalidation.

use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::sentence::SentenceSegmenter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{PatternTokenizer, TokenPattern, Tokenizer};
use crate::document::document::Document;
use crate::error::Result;

/// Lazily computed metrics for a single document.
pub struct DocumentIndex {
    doc: Document,
    tokenizer: Arc<dyn Tokenizer>,
    segmenter: SentenceSegmenter,

    sentences: OnceCell<Vec<String>>,
    sentence_tokens: OnceCell<Vec<Vec<Token>>>,
    word_sentences: OnceCell<AHashMap<String, Vec<usize>>>,
    frequencies: OnceCell<AHashMap<String, u64>>,
    vocabulary: OnceCell<AHashSet<String>>,
    vocabulary_normalized: OnceCell<AHashSet<String>>,
}

impl DocumentIndex {
    /// Create an index over the given document with the default grammar.
    pub fn new(doc: Document) -> Result<Self> {
        Self::with_pattern(doc, TokenPattern::Dropping)
    }

    /// Create an index with a specific grammar variant.
    pub fn with_pattern(doc: Document, pattern: TokenPattern) -> Result<Self> {
        let tokenizer = PatternTokenizer::with_pattern(pattern)?;
        Ok(Self::with_tokenizer(doc, Arc::new(tokenizer)))
    }

    /// Create an index with a caller-supplied tokenizer.
    pub fn with_tokenizer(doc: Document, tokenizer: Arc<dyn Tokenizer>) -> Self {
        DocumentIndex {
            doc,
            tokenizer,
            segmenter: SentenceSegmenter::new(),
            sentences: OnceCell::new(),
            sentence_tokens: OnceCell::new(),
            word_sentences: OnceCell::new(),
            frequencies: OnceCell::new(),
            vocabulary: OnceCell::new(),
            vocabulary_normalized: OnceCell::new(),
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The base filename of the underlying document.
    pub fn document_name(&self) -> String {
        self.doc.name()
    }

    /// The document's sentences, segmented on first call.
    pub fn sentences(&self) -> Result<&[String]> {
        if let Some(sentences) = self.sentences.get() {
            return Ok(sentences);
        }
        let raw = self.doc.read()?;
        let sentences = self.segmenter.segment(&raw);
        debug!(
            "segmented {} into {} sentences",
            self.doc.name(),
            sentences.len()
        );
        Ok(self.sentences.get_or_init(|| sentences))
    }

    /// Per-sentence token lists, aligned index-for-index with
    /// [`DocumentIndex::sentences`]. Tokens never span sentence boundaries
    /// because each sentence is tokenized independently.
    pub fn sentence_tokens(&self) -> Result<&[Vec<Token>]> {
        if let Some(tokens) = self.sentence_tokens.get() {
            return Ok(tokens);
        }
        let mut all = Vec::new();
        for sentence in self.sentences()? {
            let tokens: Vec<Token> = self.tokenizer.tokenize(sentence)?.collect();
            all.push(tokens);
        }
        Ok(self.sentence_tokens.get_or_init(|| all))
    }

    /// All tokens flattened in sentence order, then token order within each
    /// sentence. Lowercased when `normalized` is true.
    pub fn words(&self, normalized: bool) -> Result<Vec<String>> {
        let words = self
            .sentence_tokens()?
            .iter()
            .flatten()
            .map(|token| {
                if normalized {
                    token.normalized()
                } else {
                    token.text.clone()
                }
            })
            .collect();
        Ok(words)
    }

    /// The set of distinct words observed in this document.
    pub fn vocabulary(&self, normalized: bool) -> Result<&AHashSet<String>> {
        let cell = if normalized {
            &self.vocabulary_normalized
        } else {
            &self.vocabulary
        };
        if let Some(vocabulary) = cell.get() {
            return Ok(vocabulary);
        }
        let vocabulary: AHashSet<String> = self.words(normalized)?.into_iter().collect();
        Ok(cell.get_or_init(|| vocabulary))
    }

    /// The normalized-word frequency table.
    pub fn frequencies(&self) -> Result<&AHashMap<String, u64>> {
        if let Some(frequencies) = self.frequencies.get() {
            return Ok(frequencies);
        }
        let mut frequencies: AHashMap<String, u64> = AHashMap::new();
        for word in self.words(true)? {
            *frequencies.entry(word).or_insert(0) += 1;
        }
        Ok(self.frequencies.get_or_init(|| frequencies))
    }

    /// The number of times `word` occurs in this document. Case-insensitive;
    /// 0 for words never seen, never an error.
    pub fn word_frequency(&self, word: &str) -> Result<u64> {
        let count = self
            .frequencies()?
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0);
        Ok(count)
    }

    /// The sorted, deduplicated sentence indices containing `word`.
    pub fn word_sentence_indices(&self, word: &str) -> Result<&[usize]> {
        let indices = self
            .word_sentences_map()?
            .get(&word.to_lowercase())
            .map(|indices| indices.as_slice())
            .unwrap_or(&[]);
        Ok(indices)
    }

    /// All sentences containing at least one occurrence of `word`, in
    /// ascending sentence order. Empty for words never seen.
    pub fn sentences_containing_word(&self, word: &str) -> Result<Vec<String>> {
        let sentences = self.sentences()?;
        let matching = self
            .word_sentence_indices(word)?
            .iter()
            .map(|&index| sentences[index].clone())
            .collect();
        Ok(matching)
    }

    /// Force every lazy field. Used by the parallel corpus build so a fully
    /// warmed index can be shared read-only afterwards.
    pub fn warm(&self) -> Result<()> {
        self.sentence_tokens()?;
        self.word_sentences_map()?;
        self.frequencies()?;
        self.vocabulary(true)?;
        self.vocabulary(false)?;
        Ok(())
    }

    /// The word-to-sentence-indices inverted index. Built by one forward
    /// scan; index lists are ascending and deduplicated by construction.
    fn word_sentences_map(&self) -> Result<&AHashMap<String, Vec<usize>>> {
        if let Some(map) = self.word_sentences.get() {
            return Ok(map);
        }
        let mut map: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (index, tokens) in self.sentence_tokens()?.iter().enumerate() {
            for token in tokens {
                let indices = map.entry(token.normalized()).or_default();
                if indices.last() != Some(&index) {
                    indices.push(index);
                }
            }
        }
        Ok(self.word_sentences.get_or_init(|| map))
    }
}

impl fmt::Debug for DocumentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentIndex")
            .field("doc", &self.doc)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::ConcordError;

    fn write_doc(dir: &TempDir, name: &str, text: &str) -> Document {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        Document::new(path)
    }

    #[test]
    fn test_lonely_sentence_tokens() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(&dir, "lonely.txt", "I'm a lonely sentence");
        let index = DocumentIndex::new(doc).unwrap();

        let tokens: Vec<Vec<String>> = index
            .sentence_tokens()
            .unwrap()
            .iter()
            .map(|sentence| sentence.iter().map(|t| t.text.clone()).collect())
            .collect();
        assert_eq!(tokens, vec![vec!["I'm", "a", "lonely", "sentence"]]);
    }

    #[test]
    fn test_empty_document() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(&dir, "empty.txt", "");
        let index = DocumentIndex::new(doc).unwrap();

        assert!(index.sentences().unwrap().is_empty());
        assert!(index.words(true).unwrap().is_empty());
        assert_eq!(index.word_frequency("anything").unwrap(), 0);
        assert!(index.sentences_containing_word("anything").unwrap().is_empty());
    }

    #[test]
    fn test_tokens_aligned_with_sentences() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(&dir, "two.txt", "I know you. You are great!");
        let index = DocumentIndex::new(doc).unwrap();

        assert_eq!(
            index.sentence_tokens().unwrap().len(),
            index.sentences().unwrap().len()
        );
    }

    #[test]
    fn test_case_insensitive_frequency() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(&dir, "case.txt", "You and you and YOU.");
        let index = DocumentIndex::new(doc).unwrap();

        assert_eq!(index.word_frequency("you").unwrap(), 3);
        assert_eq!(index.word_frequency("You").unwrap(), 3);
        assert_eq!(index.word_frequency("YOU").unwrap(), 3);
    }

    #[test]
    fn test_sentences_containing_word() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(
            &dir,
            "three.txt",
            "I know you. You are great! Look before you go.",
        );
        let index = DocumentIndex::new(doc).unwrap();

        assert_eq!(index.sentences_containing_word("you").unwrap(), vec![
            "I know you.",
            "You are great!",
            "Look before you go."
        ]);
        assert_eq!(index.sentences_containing_word("know").unwrap(), vec![
            "I know you."
        ]);
        assert!(index.sentences_containing_word("absent").unwrap().is_empty());
    }

    #[test]
    fn test_sentence_indices_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(&dir, "dup.txt", "Go go go. Stop. Go again.");
        let index = DocumentIndex::new(doc).unwrap();

        assert_eq!(index.word_sentence_indices("go").unwrap(), &[0, 2]);
    }

    #[test]
    fn test_vocabulary_normalization() {
        let dir = TempDir::new().unwrap();
        let doc = write_doc(&dir, "vocab.txt", "Great ideas. GREAT minds.");
        let index = DocumentIndex::new(doc).unwrap();

        let normalized = index.vocabulary(true).unwrap();
        assert!(normalized.contains("great"));
        assert!(!normalized.contains("Great"));

        let original = index.vocabulary(false).unwrap();
        assert!(original.contains("Great"));
        assert!(original.contains("GREAT"));
    }

    #[test]
    fn test_missing_document_propagates_not_found() {
        let dir = TempDir::new().unwrap();
        let doc = Document::new(dir.path().join("missing.txt"));
        let index = DocumentIndex::new(doc).unwrap();

        match index.sentences() {
            Err(ConcordError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }
}
