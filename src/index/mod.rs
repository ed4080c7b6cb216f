//! Index module for stemdex.
//!
//! This module provides read access to a positional inverted index stored as
//! a set of binary files in one directory:
//!
//! | File               | Contents                                          |
//! |--------------------|---------------------------------------------------|
//! | `vocab.bin`        | all terms, sorted, packed back to back            |
//! | `vocabTable.bin`   | term count, then `(term offset, postings offset)` |
//! | `postings.bin`     | gap-coded positional postings blocks              |
//! | `statistics.bin`   | term count, average postings length, frequencies  |
//! | `mostFreqWord.bin` | the most frequent terms, packed back to back      |
//!
//! All integers are big-endian.

pub mod catalog;
pub mod config;
pub mod postings;
pub mod reader;
pub mod statistics;
pub mod vocabulary;

/// Packed term bytes.
pub const VOCAB_FILE: &str = "vocab.bin";
/// Vocabulary offset table.
pub const VOCAB_TABLE_FILE: &str = "vocabTable.bin";
/// Postings blocks.
pub const POSTINGS_FILE: &str = "postings.bin";
/// Numeric statistics.
pub const STATISTICS_FILE: &str = "statistics.bin";
/// Most frequent terms.
pub const MOST_FREQUENT_FILE: &str = "mostFreqWord.bin";
/// Optional document manifest.
pub const CATALOG_FILE: &str = "catalog.json";

// Re-export commonly used types
pub use catalog::{DirectoryDocumentSource, DocumentCatalog, DocumentSource, ManifestDocumentSource};
pub use config::IndexConfig;
pub use postings::{Posting, PostingsList, PostingsReader};
pub use reader::{DiskPositionalIndex, IndexReader};
pub use statistics::{IndexStatistics, TermProportion};
pub use vocabulary::{VocabularyEntry, VocabularyIndex};
