//! Aggregate index statistics.
//!
//! Two companion files hold them. `statistics.bin`:
//!
//! ```text
//! term_count: u32
//! average_postings_length: u32
//! 10 × { word_length: u32, proportion: f64 }
//! memory_estimate: u64
//! ```
//!
//! and `mostFreqWord.bin`, the ten most frequent terms packed back to back. The
//! n-th `word_length` gives the length of the n-th word.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StemdexError};
use crate::storage::StorageInput;
use crate::storage::codec::{self, U32_SIZE, U64_SIZE};

/// Number of most frequent terms recorded in the statistics.
pub const MOST_FREQUENT_TERMS: usize = 10;

/// Exact encoded size of `statistics.bin`.
pub const STATISTICS_SIZE: u64 =
    2 * U32_SIZE + MOST_FREQUENT_TERMS as u64 * (U32_SIZE + U64_SIZE) + U64_SIZE;

/// A term and the fraction of documents that contain it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermProportion {
    pub term: String,
    pub proportion: f64,
}

/// Immutable snapshot of index-wide statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStatistics {
    /// Number of distinct terms.
    pub term_count: u32,
    /// Average number of documents per postings list.
    pub average_postings_length: u32,
    /// The most frequent terms, in file order.
    pub most_frequent: Vec<TermProportion>,
    /// Estimated size in bytes of the index if fully loaded in memory.
    pub memory_estimate: u64,
}

impl IndexStatistics {
    /// Decode the statistics from the numeric file and the word file.
    pub fn read<S: StorageInput, W: StorageInput>(stats: &mut S, words: &mut W) -> Result<Self> {
        if stats.size() < STATISTICS_SIZE {
            return Err(StemdexError::corrupt(format!(
                "statistics file holds {} bytes, expected {STATISTICS_SIZE}",
                stats.size()
            )));
        }

        codec::seek_to(stats, 0)?;
        codec::seek_to(words, 0)?;
        let mut words_left = words.size();

        let term_count = codec::read_u32(stats)?;
        let average_postings_length = codec::read_u32(stats)?;

        let mut most_frequent = Vec::with_capacity(MOST_FREQUENT_TERMS);
        for rank in 0..MOST_FREQUENT_TERMS {
            let len = codec::read_u32(stats)? as u64;
            if len > words_left {
                return Err(StemdexError::corrupt(format!(
                    "frequent term {rank} declares {len} bytes, only {words_left} left in the word file"
                )));
            }
            words_left -= len;

            let bytes = codec::read_bytes(words, len as usize)?;
            let term = String::from_utf8(bytes).map_err(|e| {
                StemdexError::corrupt(format!("frequent term {rank} is not valid UTF-8: {e}"))
            })?;

            let proportion = codec::read_f64(stats)?;
            if !(0.0..=1.0).contains(&proportion) {
                warn!("Frequent term {term:?} has proportion {proportion} outside [0, 1]");
            }

            most_frequent.push(TermProportion { term, proportion });
        }

        let memory_estimate = codec::read_u64(stats)?;

        Ok(IndexStatistics {
            term_count,
            average_postings_length,
            most_frequent,
            memory_estimate,
        })
    }

    /// The most frequent terms, in file order.
    pub fn most_frequent(&self) -> &[TermProportion] {
        &self.most_frequent
    }

    /// Fraction of documents containing `term`, if it is one of the most
    /// frequent terms.
    pub fn proportion(&self, term: &str) -> Option<f64> {
        self.most_frequent
            .iter()
            .find(|entry| entry.term == term)
            .map(|entry| entry.proportion)
    }
}
