//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ConcordArgs, OutputFormat};
use crate::corpus::rank::LengthInterval;
use crate::error::Result;

/// One ranked word with its containing documents and sentences.
///
/// Values are raw index output: the word is normalized, document names are in
/// supply order, sentences keep original casing. Display conveniences
/// (capitalization, name sorting, wrapping) happen only in human rendering.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportEntry {
    pub word: String,
    pub frequency: u64,
    pub documents: Vec<String>,
    pub sentences: Vec<String>,
}

/// Result structure for the report command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportOutput {
    pub interval: LengthInterval,
    pub n_common_words: usize,
    pub max_sentence_column_width: usize,
    pub entries: Vec<ReportEntry>,
}

/// Result structure for the search command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub word: String,
    pub frequency: u64,
    pub documents: Vec<String>,
    pub sentences: Vec<String>,
}

/// Per-document statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentStats {
    pub name: String,
    pub sentences: usize,
    pub tokens: usize,
    pub distinct_words: usize,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub documents: Vec<DocumentStats>,
    pub total_sentences: usize,
    pub total_tokens: usize,
    pub distinct_words: usize,
}

/// Output the report in the selected format.
pub fn output_report(result: &ReportOutput, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!();
                println!("[*] Showing most common words with the following predicates:");
                println!(
                    "       i. Word lengths are within the interval of ({}, {}), and",
                    result.interval.lower(),
                    result.interval.upper()
                );
                println!(
                    "      ii. {} most common elements from the most common to the least.",
                    result.n_common_words
                );
            }

            let headers = [
                "#",
                "Word (Total Occurrences)",
                "Documents",
                "Sentences containing the word",
            ];
            let rows: Vec<Vec<String>> = result
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let mut documents = entry.documents.clone();
                    documents.sort();
                    let sentences: Vec<String> = entry
                        .sentences
                        .iter()
                        .map(|s| wrap_text(s, result.max_sentence_column_width))
                        .collect();
                    vec![
                        index.to_string(),
                        format!("{} ({})", capitalize(&entry.word), entry.frequency),
                        documents.join("\n"),
                        sentences.join("\n\n"),
                    ]
                })
                .collect();

            println!("{}", render_table(&headers, &rows));
            Ok(())
        }
    }
}

/// Output a search result in the selected format.
pub fn output_search(result: &SearchOutput, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("Word: {}", result.word);
            println!("Total occurrences: {}", result.frequency);
            println!();
            println!("Documents:");
            println!("──────────");
            for name in &result.documents {
                println!("  {name}");
            }
            println!();
            println!("Sentences:");
            println!("──────────");
            for sentence in &result.sentences {
                println!("  {sentence}");
            }
            Ok(())
        }
    }
}

/// Output corpus statistics in the selected format.
pub fn output_stats(result: &StatsOutput, args: &ConcordArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human => {
            println!("Corpus Statistics:");
            println!("══════════════════");
            println!("Total documents: {}", result.documents.len());
            println!("Total sentences: {}", result.total_sentences);
            println!("Total tokens: {}", result.total_tokens);
            println!("Distinct words: {}", result.distinct_words);

            if !result.documents.is_empty() {
                println!();
                println!("Per document:");
                println!("─────────────");
                for doc in &result.documents {
                    println!(
                        "  {}: {} sentences, {} tokens, {} distinct words",
                        doc.name, doc.sentences, doc.tokens, doc.distinct_words
                    );
                }
            }
            Ok(())
        }
    }
}

/// Output any result as JSON, pretty-printed when requested.
fn output_json<T: Serialize>(result: &T, args: &ConcordArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Capitalize a word for display: first character uppercase, rest lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Greedily wrap text at word boundaries so no line exceeds `width`
/// characters. Words longer than `width` get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Render a bordered grid table. Cells may span multiple lines.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            for line in cell.lines() {
                widths[i] = widths[i].max(line.chars().count());
            }
        }
    }

    let border: String = {
        let mut s = String::from("+");
        for width in &widths {
            s.push_str(&"-".repeat(width + 2));
            s.push('+');
        }
        s
    };

    let render_line = |cells: &[&str], widths: &[usize]| {
        let mut s = String::from("|");
        for (cell, width) in cells.iter().zip(widths) {
            let pad = width - cell.chars().count();
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(pad + 1));
            s.push('|');
        }
        s
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&render_line(&headers.to_vec(), &widths));
    out.push('\n');
    out.push_str(&border);

    for row in rows {
        let cell_lines: Vec<Vec<&str>> = row.iter().map(|cell| cell.lines().collect()).collect();
        let height = cell_lines.iter().map(|lines| lines.len()).max().unwrap_or(0);
        for line_index in 0..height.max(1) {
            let cells: Vec<&str> = cell_lines
                .iter()
                .map(|lines| lines.get(line_index).copied().unwrap_or(""))
                .collect();
            out.push('\n');
            out.push_str(&render_line(&cells, &widths));
        }
        out.push('\n');
        out.push_str(&border);
    }

    out
}
