//! Command line argument parsing for the Concord CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::TokenPattern;
use crate::corpus::rank::LengthInterval;
use crate::error::{ConcordError, Result};

/// Minimum accepted width for the wrapped sentence column.
pub const MIN_SENTENCE_COLUMN_WIDTH: usize = 40;

/// Concord - word-frequency and concordance metrics for plain-text corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "concord")]
#[command(about = "Word-frequency and concordance metrics for plain-text corpora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ConcordArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ConcordArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report the most common words with their documents and sentences
    Report(ReportArgs),

    /// Look up one word's frequency, documents, and sentences
    Search(SearchArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Lexical grammar variants selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Drop unmatched punctuation (default)
    Dropping,
    /// Emit punctuation as standalone tokens
    Standalone,
}

impl From<Grammar> for TokenPattern {
    fn from(grammar: Grammar) -> Self {
        match grammar {
            Grammar::Dropping => TokenPattern::Dropping,
            Grammar::Standalone => TokenPattern::Standalone,
        }
    }
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Directory scanned (non-recursively) for .txt documents
    #[arg(value_name = "DOCUMENTS_DIR")]
    pub documents_dir: PathBuf,

    /// Smallest and largest word length to consider
    #[arg(
        short = 'i',
        long,
        num_args = 2,
        value_names = ["LOWER", "UPPER"],
        default_values_t = [6, 8]
    )]
    pub word_length_interval: Vec<usize>,

    /// Number of most common words to report
    #[arg(short = 'n', long, default_value = "5")]
    pub n_common_words: usize,

    /// Maximum width of the sentence column, in characters
    #[arg(short = 'w', long, default_value = "160")]
    pub max_sentence_column_width: usize,

    /// Lexical grammar to tokenize with
    #[arg(long, value_enum, default_value = "dropping")]
    pub grammar: Grammar,

    /// Build document indices in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl ReportArgs {
    /// Validate the interval bounds and convert them.
    pub fn interval(&self) -> Result<LengthInterval> {
        // clap enforces exactly two values via num_args.
        LengthInterval::new(self.word_length_interval[0], self.word_length_interval[1])
    }

    /// Reject malformed arguments before any index is built.
    pub fn validate(&self) -> Result<()> {
        self.interval()?;
        if self.n_common_words < 1 {
            return Err(ConcordError::invalid_argument(format!(
                "the n common words value of {} must be greater than 0",
                self.n_common_words
            )));
        }
        if self.max_sentence_column_width < MIN_SENTENCE_COLUMN_WIDTH {
            return Err(ConcordError::invalid_argument(format!(
                "the maximum sentence column width of {} must be at least {}",
                self.max_sentence_column_width, MIN_SENTENCE_COLUMN_WIDTH
            )));
        }
        Ok(())
    }
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Directory scanned (non-recursively) for .txt documents
    #[arg(value_name = "DOCUMENTS_DIR")]
    pub documents_dir: PathBuf,

    /// Word to look up (case-insensitive)
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Lexical grammar to tokenize with
    #[arg(long, value_enum, default_value = "dropping")]
    pub grammar: Grammar,

    /// Build document indices in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Directory scanned (non-recursively) for .txt documents
    #[arg(value_name = "DOCUMENTS_DIR")]
    pub documents_dir: PathBuf,

    /// Lexical grammar to tokenize with
    #[arg(long, value_enum, default_value = "dropping")]
    pub grammar: Grammar,

    /// Build document indices in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
