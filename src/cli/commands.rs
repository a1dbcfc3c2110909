//! Command implementations for the Concord CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::analysis::tokenizer::TokenPattern;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::index::CorpusIndex;
use crate::corpus::rank::most_common_words;
use crate::document::document::Document;
use crate::document::index::DocumentIndex;
use crate::error::{ConcordError, Result};

/// Execute a CLI command.
pub fn execute_command(args: ConcordArgs) -> Result<()> {
    match &args.command {
        Command::Report(report_args) => report(report_args.clone(), &args),
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Gather all `.txt` files directly inside `dir`, in sorted path order.
pub fn text_file_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            ConcordError::not_found(format!("documents directory not found: {}", dir.display()))
        }
        _ => ConcordError::Io(e),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    // Sorted so document indices are stable across runs.
    paths.sort();
    Ok(paths)
}

/// Build the corpus index over every text file in `dir`.
///
/// An unreadable document aborts the build with the propagated error; the
/// core never skips documents silently.
pub fn build_corpus(dir: &Path, grammar: Grammar, parallel: bool) -> Result<CorpusIndex> {
    let paths = text_file_paths(dir)?;
    info!("indexing {} documents from {}", paths.len(), dir.display());

    let pattern = TokenPattern::from(grammar);
    let indices = paths
        .into_iter()
        .map(|path| DocumentIndex::with_pattern(Document::new(path), pattern))
        .collect::<Result<Vec<_>>>()?;

    if parallel {
        CorpusIndex::build_parallel(indices)
    } else {
        Ok(CorpusIndex::new(indices))
    }
}

/// Report the most common words with their documents and sentences.
fn report(args: ReportArgs, cli_args: &ConcordArgs) -> Result<()> {
    args.validate()?;
    let interval = args.interval()?;

    if cli_args.verbosity() > 1 {
        println!("Scanning documents in: {}", args.documents_dir.display());
    }

    let corpus = build_corpus(&args.documents_dir, args.grammar, args.parallel)?;
    let ranked = most_common_words(&corpus, interval, Some(args.n_common_words))?;
    debug!("ranked {} words for the report", ranked.len());

    let mut entries = Vec::new();
    for (word, frequency) in ranked {
        entries.push(ReportEntry {
            documents: corpus.document_names_containing_word(&word)?,
            sentences: corpus.sentences_containing_word(&word)?,
            word,
            frequency,
        });
    }

    output_report(
        &ReportOutput {
            interval,
            n_common_words: args.n_common_words,
            max_sentence_column_width: args.max_sentence_column_width,
            entries,
        },
        cli_args,
    )
}

/// Look up a single word across the corpus.
fn search(args: SearchArgs, cli_args: &ConcordArgs) -> Result<()> {
    let corpus = build_corpus(&args.documents_dir, args.grammar, args.parallel)?;

    let output = SearchOutput {
        frequency: corpus.word_frequency(&args.word)?,
        documents: corpus.document_names_containing_word(&args.word)?,
        sentences: corpus.sentences_containing_word(&args.word)?,
        word: args.word,
    };
    output_search(&output, cli_args)
}

/// Show per-document and corpus-wide statistics.
fn stats(args: StatsArgs, cli_args: &ConcordArgs) -> Result<()> {
    let corpus = build_corpus(&args.documents_dir, args.grammar, args.parallel)?;

    let mut documents = Vec::new();
    for document in corpus.documents() {
        let tokens = document
            .sentence_tokens()?
            .iter()
            .map(|sentence| sentence.len())
            .sum();
        documents.push(DocumentStats {
            name: document.document_name(),
            sentences: document.sentences()?.len(),
            tokens,
            distinct_words: document.vocabulary(true)?.len(),
        });
    }

    let output = StatsOutput {
        total_sentences: documents.iter().map(|doc| doc.sentences).sum(),
        total_tokens: documents.iter().map(|doc| doc.tokens).sum(),
        distinct_words: corpus.frequencies()?.len(),
        documents,
    };
    output_stats(&output, cli_args)
}
