//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, StemdexArgs};
use crate::error::Result;
use crate::index::TermProportion;

/// A command result that can also be printed for humans.
pub trait Report: Serialize {
    /// Print the result in human-readable form.
    fn print_human(&self);
}

/// Index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsReport {
    pub path: String,
    pub term_count: u32,
    pub document_count: usize,
    pub average_postings_length: u32,
    pub memory_estimate_bytes: u64,
    pub most_frequent: Vec<TermProportion>,
}

/// One posting as shown to the user.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostingRow {
    pub doc_id: u32,
    pub document: Option<String>,
    pub term_frequency: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<u32>>,
}

/// Result of a term lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub term: String,
    pub found: bool,
    pub postings: Vec<PostingRow>,
}

/// A token and its stem.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemmedToken {
    pub token: String,
    pub stem: String,
}

/// Result of stemming.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResult {
    pub stemmer: String,
    pub tokens: Vec<StemmedToken>,
}

/// Result of listing the vocabulary.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermsResult {
    pub total: usize,
    pub terms: Vec<String>,
}

impl Report for StatsReport {
    fn print_human(&self) {
        println!("Index Statistics:");
        println!("════════════════");
        println!("Path: {}", self.path);
        println!("Total terms: {}", self.term_count);
        println!("Total documents: {}", self.document_count);
        println!("Average postings length: {}", self.average_postings_length);
        println!(
            "Approximate memory requirement: {}",
            format_bytes(self.memory_estimate_bytes)
        );

        if !self.most_frequent.is_empty() {
            println!();
            println!("Most frequent terms:");
            for entry in &self.most_frequent {
                println!("  {:<16} {:>6.2}%", entry.term, entry.proportion * 100.0);
            }
        }
    }
}

impl Report for LookupResult {
    fn print_human(&self) {
        if !self.found {
            println!("'{}' is not in the vocabulary", self.term);
            return;
        }

        println!("'{}' occurs in {} documents", self.term, self.postings.len());
        for row in &self.postings {
            let name = row.document.as_deref().unwrap_or("<unknown>");
            match &row.positions {
                Some(positions) => println!(
                    "  {:>6}  {name}  tf={}  positions={positions:?}",
                    row.doc_id, row.term_frequency
                ),
                None => println!("  {:>6}  {name}  tf={}", row.doc_id, row.term_frequency),
            }
        }
    }
}

impl Report for StemResult {
    fn print_human(&self) {
        for entry in &self.tokens {
            println!("{} -> {}", entry.token, entry.stem);
        }
    }
}

impl Report for TermsResult {
    fn print_human(&self) {
        for term in &self.terms {
            println!("{term}");
        }
        if self.terms.len() < self.total {
            println!("... {} of {} terms shown", self.terms.len(), self.total);
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Report>(message: &str, result: &T, args: &StemdexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Report>(message: &str, result: &T, args: &StemdexArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    result.print_human();
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &StemdexArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format bytes in human-readable format.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        let unit = UNITS[unit_index];
        format!("{bytes} {unit}")
    } else {
        let unit = UNITS[unit_index];
        format!("{size:.1} {unit}")
    }
}
