//! Vocabulary table and on-disk binary search.
//!
//! The table (`vocabTable.bin`) is loaded fully at open time: a leading term
//! count, then one `(term offset, postings offset)` pair per term, ordered by
//! the terms' bytes. The terms themselves stay on disk in `vocab.bin`, packed
//! back to back; entry `i` spans `[offset_i, offset_{i+1})`, and the last entry
//! runs to the end of the file.

use std::cmp::Ordering;
use std::io::{Read, Seek};

use log::{trace, warn};

use crate::error::{Result, StemdexError};
use crate::storage::StorageInput;
use crate::storage::codec::{self, U32_SIZE, U64_SIZE};

/// Encoded size of one table entry.
pub const ENTRY_SIZE: u64 = 2 * U64_SIZE;

/// Location of one term and of its postings block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    /// Byte offset of the term in the vocabulary file.
    pub term_offset: u64,
    /// Byte offset of the term's postings block in the postings file.
    pub postings_offset: u64,
}

/// In-memory directory of term locations.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    entries: Vec<VocabularyEntry>,
    vocabulary_len: u64,
}

impl VocabularyIndex {
    /// Create an index over already decoded entries.
    ///
    /// `vocabulary_len` is the length of the vocabulary byte file; it closes
    /// the span of the last term.
    pub fn new(entries: Vec<VocabularyEntry>, vocabulary_len: u64) -> Self {
        VocabularyIndex {
            entries,
            vocabulary_len,
        }
    }

    /// Decode the vocabulary table.
    pub fn read_table<R: StorageInput>(table: &mut R, vocabulary_len: u64) -> Result<Self> {
        let size = table.size();
        codec::seek_to(table, 0)?;
        let count = codec::read_u32(table)? as u64;

        let available = size.saturating_sub(U32_SIZE);
        let needed = count * ENTRY_SIZE;
        if needed > available {
            return Err(StemdexError::corrupt(format!(
                "vocabulary table declares {count} terms ({needed} bytes) but holds {available} bytes"
            )));
        }
        if available > needed {
            warn!(
                "Ignoring {} trailing bytes after {count} vocabulary table entries",
                available - needed
            );
        }

        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let term_offset = codec::read_u64(table)?;
            let postings_offset = codec::read_u64(table)?;
            if term_offset > vocabulary_len {
                return Err(StemdexError::corrupt(format!(
                    "term offset {term_offset} lies beyond the vocabulary file ({vocabulary_len} bytes)"
                )));
            }
            entries.push(VocabularyEntry {
                term_offset,
                postings_offset,
            });
        }

        Ok(VocabularyIndex::new(entries, vocabulary_len))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no terms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Byte span `(offset, length)` of the term at `index`.
    pub fn term_span(&self, index: usize) -> Result<(u64, usize)> {
        let entry = self.entries.get(index).ok_or_else(|| {
            StemdexError::other(format!(
                "term index {index} out of range ({} terms)",
                self.entries.len()
            ))
        })?;
        let end = match self.entries.get(index + 1) {
            Some(next) => next.term_offset,
            None => self.vocabulary_len,
        };

        if end < entry.term_offset || end > self.vocabulary_len {
            return Err(StemdexError::corrupt(format!(
                "term {index} spans [{}, {end}), outside a {}-byte vocabulary",
                entry.term_offset, self.vocabulary_len
            )));
        }

        Ok((entry.term_offset, (end - entry.term_offset) as usize))
    }

    /// Read the bytes of the term at `index` into `buffer`.
    fn read_term_into<R: Read + Seek>(
        &self,
        vocabulary: &mut R,
        index: usize,
        buffer: &mut Vec<u8>,
    ) -> Result<()> {
        let (offset, len) = self.term_span(index)?;
        codec::seek_to(vocabulary, offset)?;
        buffer.clear();
        buffer.resize(len, 0);
        codec::read_exact_into(vocabulary, buffer)
    }

    /// Read the bytes of the term at `index`.
    pub fn term_at<R: Read + Seek>(&self, vocabulary: &mut R, index: usize) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.read_term_into(vocabulary, index, &mut buffer)?;
        Ok(buffer)
    }

    /// Find the postings offset of `term`.
    ///
    /// Binary search over the table; each probe reads one candidate term from
    /// the vocabulary file and compares bytes ordinally. Returns `Ok(None)` if
    /// the term is absent.
    pub fn locate<R: Read + Seek>(&self, vocabulary: &mut R, term: &[u8]) -> Result<Option<u64>> {
        let mut low = 0;
        let mut high = self.entries.len();
        let mut candidate = Vec::new();
        let mut probes = 0;

        while low < high {
            let mid = low + (high - low) / 2;
            self.read_term_into(vocabulary, mid, &mut candidate)?;
            probes += 1;

            match term.cmp(candidate.as_slice()) {
                Ordering::Equal => {
                    trace!("Located term after {probes} probes");
                    return Ok(Some(self.entries[mid].postings_offset));
                }
                Ordering::Less => high = mid,
                Ordering::Greater => low = mid + 1,
            }
        }

        trace!("Term absent after {probes} probes");
        Ok(None)
    }
}
