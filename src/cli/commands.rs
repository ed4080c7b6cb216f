//! Command implementations for the stemdex CLI.

use log::debug;

use crate::analysis::{PorterStemmer, Stemmer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::{DiskPositionalIndex, IndexConfig, IndexReader};

/// Execute a CLI command.
pub fn execute_command(args: StemdexArgs) -> Result<()> {
    match &args.command {
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Lookup(lookup_args) => lookup_term(lookup_args, &args),
        Command::Stem(stem_args) => stem_tokens(stem_args, &args),
        Command::Terms(terms_args) => list_terms(terms_args, &args),
    }
}

fn load_config(cli_args: &StemdexArgs) -> Result<IndexConfig> {
    match &cli_args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            IndexConfig::from_file(path)
        }
        None => Ok(IndexConfig::default()),
    }
}

fn open_index(path: &std::path::Path, cli_args: &StemdexArgs) -> Result<DiskPositionalIndex> {
    let config = load_config(cli_args)?;
    DiskPositionalIndex::open_with_config(path, config)
}

/// Show index statistics.
fn show_stats(args: &StatsArgs, cli_args: &StemdexArgs) -> Result<()> {
    let mut index = open_index(&args.index_path, cli_args)?;
    let statistics = index.statistics();

    let report = StatsReport {
        path: args.index_path.to_string_lossy().to_string(),
        term_count: statistics.term_count,
        document_count: index.document_count(),
        average_postings_length: statistics.average_postings_length,
        memory_estimate_bytes: statistics.memory_estimate,
        most_frequent: statistics.most_frequent().to_vec(),
    };

    index.close()?;
    output_result("Index statistics", &report, cli_args)
}

/// Look up one term.
fn lookup_term(args: &LookupArgs, cli_args: &StemdexArgs) -> Result<()> {
    let mut index = open_index(&args.index_path, cli_args)?;
    let term = args.search_term();
    debug!("Looking up {:?} as {term:?}", args.term);

    let result = match index.postings(&term, args.positions)? {
        Some(list) => LookupResult {
            found: true,
            postings: list
                .into_iter()
                .map(|posting| PostingRow {
                    doc_id: posting.doc_id,
                    document: index.document_name(posting.doc_id).map(str::to_string),
                    term_frequency: posting.term_frequency,
                    positions: posting.positions,
                })
                .collect(),
            term,
        },
        None => LookupResult {
            term,
            found: false,
            postings: Vec::new(),
        },
    };

    index.close()?;
    output_result("Lookup results", &result, cli_args)
}

/// Stem tokens without an index.
fn stem_tokens(args: &StemArgs, cli_args: &StemdexArgs) -> Result<()> {
    let stemmer = PorterStemmer::new();
    let result = StemResult {
        stemmer: stemmer.name().to_string(),
        tokens: args
            .tokens
            .iter()
            .map(|token| StemmedToken {
                token: token.clone(),
                stem: stemmer.stem(token),
            })
            .collect(),
    };

    output_result("Stems", &result, cli_args)
}

/// List the vocabulary.
fn list_terms(args: &TermsArgs, cli_args: &StemdexArgs) -> Result<()> {
    let mut index = open_index(&args.index_path, cli_args)?;
    let mut terms = index.terms()?;
    let total = terms.len();
    if let Some(limit) = args.limit {
        terms.truncate(limit);
    }

    index.close()?;
    output_result("Vocabulary", &TermsResult { total, terms }, cli_args)
}
