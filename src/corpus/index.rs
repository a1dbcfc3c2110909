//! Corpus-level metrics index.
//!
//! [`CorpusIndex`] aggregates a list of [`DocumentIndex`] instances supplied
//! in a fixed order: the position of each index in that list is its document
//! index for every reverse lookup. Aggregate state is derived lazily and
//! memoized, mirroring the per-document layer.

use std::cell::OnceCell;
use std::fmt;

use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;

use crate::corpus::rank::LengthInterval;
use crate::document::index::DocumentIndex;
use crate::error::Result;

/// Aggregate metrics over an ordered collection of document indices.
pub struct CorpusIndex {
    documents: Vec<DocumentIndex>,

    frequencies: OnceCell<AHashMap<String, u64>>,
    word_documents: OnceCell<AHashMap<String, Vec<usize>>>,
}

impl CorpusIndex {
    /// Create a corpus index over the given documents. Document indices in
    /// all lookups refer to positions in this list.
    pub fn new(documents: Vec<DocumentIndex>) -> Self {
        CorpusIndex {
            documents,
            frequencies: OnceCell::new(),
            word_documents: OnceCell::new(),
        }
    }

    /// Create a corpus index after warming every document on the rayon pool.
    ///
    /// Each document index is built independently with no shared mutable
    /// state; the aggregate merge is commutative, so results are identical to
    /// the sequential path.
    pub fn build_parallel(documents: Vec<DocumentIndex>) -> Result<Self> {
        let documents: Vec<DocumentIndex> = documents
            .into_par_iter()
            .map(|index| {
                index.warm()?;
                Ok(index)
            })
            .collect::<Result<Vec<_>>>()?;
        debug!("warmed {} document indices in parallel", documents.len());
        Ok(Self::new(documents))
    }

    /// The document indices in supply order.
    pub fn documents(&self) -> &[DocumentIndex] {
        &self.documents
    }

    /// The number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The aggregate normalized-word frequency table: for every word, the
    /// sum of its per-document frequencies.
    pub fn frequencies(&self) -> Result<&AHashMap<String, u64>> {
        if let Some(frequencies) = self.frequencies.get() {
            return Ok(frequencies);
        }
        let mut aggregate: AHashMap<String, u64> = AHashMap::new();
        for document in &self.documents {
            for (word, count) in document.frequencies()? {
                *aggregate.entry(word.clone()).or_insert(0) += count;
            }
        }
        Ok(self.frequencies.get_or_init(|| aggregate))
    }

    /// Total occurrences of `word` across the corpus. Case-insensitive; 0
    /// for words never seen, never an error.
    pub fn word_frequency(&self, word: &str) -> Result<u64> {
        let count = self
            .frequencies()?
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(0);
        Ok(count)
    }

    /// Names of the documents containing `word`, in the ascending
    /// document-index order the documents were supplied. The index does not
    /// sort names; callers may re-sort for display.
    pub fn document_names_containing_word(&self, word: &str) -> Result<Vec<String>> {
        let names = self
            .word_document_indices(word)?
            .iter()
            .map(|&index| self.documents[index].document_name())
            .collect();
        Ok(names)
    }

    /// All sentences containing `word` across the corpus: documents in
    /// ascending index order, within-document sentence order preserved.
    pub fn sentences_containing_word(&self, word: &str) -> Result<Vec<String>> {
        let word = word.to_lowercase();
        let mut sentences = Vec::new();
        for &index in self.word_document_indices(&word)? {
            sentences.extend(self.documents[index].sentences_containing_word(&word)?);
        }
        Ok(sentences)
    }

    /// The sorted document indices whose vocabulary contains `word`.
    pub fn word_document_indices(&self, word: &str) -> Result<&[usize]> {
        let indices = self
            .word_documents_map()?
            .get(&word.to_lowercase())
            .map(|indices| indices.as_slice())
            .unwrap_or(&[]);
        Ok(indices)
    }

    /// The most frequent words whose normalized character length lies within
    /// `interval` (inclusive), sorted descending by frequency and truncated
    /// to `limit` entries when given.
    ///
    /// The sort is stable, but the relative order of equal-frequency words
    /// follows the aggregate table's iteration order and is unspecified.
    pub fn most_common_words_filtered_by_length(
        &self,
        interval: LengthInterval,
        limit: Option<usize>,
    ) -> Result<Vec<(String, u64)>> {
        let mut common: Vec<(String, u64)> = self
            .frequencies()?
            .iter()
            .filter(|(word, _)| interval.contains(word.chars().count()))
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        common.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            common.truncate(limit);
        }
        Ok(common)
    }

    /// The word-to-document-indices inverted index, built from the union of
    /// each document's normalized vocabulary (not weighted by frequency).
    /// Index lists are ascending by construction.
    fn word_documents_map(&self) -> Result<&AHashMap<String, Vec<usize>>> {
        if let Some(map) = self.word_documents.get() {
            return Ok(map);
        }
        let mut map: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (index, document) in self.documents.iter().enumerate() {
            for word in document.vocabulary(true)? {
                map.entry(word.clone()).or_default().push(index);
            }
        }
        Ok(self.word_documents.get_or_init(|| map))
    }
}

impl fmt::Debug for CorpusIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorpusIndex")
            .field("documents", &self.documents.len())
            .finish()
    }
}
