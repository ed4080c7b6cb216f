//! Positional postings decoding.
//!
//! A postings block is laid out as:
//!
//! ```text
//! df: u32
//! df × {
//!     doc_gap: u32        // delta from the previous document ID, 0 at block start
//!     tf: u32
//!     tf × pos_gap: u32   // delta from the previous position, 0 per document
//! }
//! ```
//!
//! All integers are big-endian. Position gaps are always present on disk; a
//! caller that does not want positions still has them read and discarded so
//! the stream is left at the end of the block.

use std::io::{Read, Seek};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemdexError};
use crate::storage::codec::{self, U32_SIZE};

/// Smallest encoded size of one posting: document gap and term frequency.
const MIN_POSTING_SIZE: u64 = 2 * U32_SIZE;

/// A single posting: one term in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Document ID, an index into the document catalog.
    pub doc_id: u32,
    /// Number of occurrences of the term in the document.
    pub term_frequency: u32,
    /// Absolute, strictly increasing positions, when they were requested.
    pub positions: Option<Vec<u32>>,
}

impl Posting {
    /// Get positions if available.
    pub fn positions(&self) -> Option<&[u32]> {
        self.positions.as_deref()
    }
}

/// The postings of one term, ordered by document ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingsList {
    postings: Vec<Posting>,
}

impl PostingsList {
    /// Create a list from postings already in document order.
    pub fn new(postings: Vec<Posting>) -> Self {
        PostingsList { postings }
    }

    /// Number of documents containing the term.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether no document contains the term.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Get an iterator over the postings.
    pub fn iter(&self) -> std::slice::Iter<'_, Posting> {
        self.postings.iter()
    }

    /// The document IDs, ascending.
    pub fn doc_ids(&self) -> Vec<u32> {
        self.postings.iter().map(|p| p.doc_id).collect()
    }

    /// Borrow the postings as a slice.
    pub fn as_slice(&self) -> &[Posting] {
        &self.postings
    }

}

impl<'a> IntoIterator for &'a PostingsList {
    type Item = &'a Posting;
    type IntoIter = std::slice::Iter<'a, Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.iter()
    }
}

impl IntoIterator for PostingsList {
    type Item = Posting;
    type IntoIter = std::vec::IntoIter<Posting>;

    fn into_iter(self) -> Self::IntoIter {
        self.postings.into_iter()
    }
}

/// Bounded cursor over one postings block.
///
/// Tracks how many bytes the block may still use so declared counts can be
/// checked before anything is allocated for them.
struct BlockCursor<'a, R> {
    input: &'a mut R,
    start: u64,
    position: u64,
    end: u64,
}

impl<'a, R: Read + Seek> BlockCursor<'a, R> {
    fn open(input: &'a mut R, offset: u64, end: u64) -> Result<Self> {
        codec::seek_to(input, offset)?;
        Ok(BlockCursor {
            input,
            start: offset,
            position: offset,
            end,
        })
    }

    fn remaining(&self) -> u64 {
        self.end.saturating_sub(self.position)
    }

    fn ensure(&self, bytes: u64, what: &str) -> Result<()> {
        if bytes > self.remaining() {
            return Err(StemdexError::corrupt(format!(
                "postings block at offset {}: {what} needs {bytes} bytes but only {} remain",
                self.start,
                self.remaining()
            )));
        }
        Ok(())
    }

    fn read_u32(&mut self, what: &str) -> Result<u32> {
        self.ensure(U32_SIZE, what)?;
        let value = codec::read_u32(&mut *self.input)?;
        self.position += U32_SIZE;
        Ok(value)
    }

    fn skip(&mut self, bytes: u64, what: &str) -> Result<()> {
        self.ensure(bytes, what)?;
        codec::skip_bytes(&mut *self.input, bytes)?;
        self.position += bytes;
        Ok(())
    }
}

/// Decoder for postings blocks in one postings file.
#[derive(Debug, Clone, Copy)]
pub struct PostingsReader {
    file_len: u64,
}

impl PostingsReader {
    /// Create a reader for a postings file of `file_len` bytes.
    pub fn new(file_len: u64) -> Self {
        PostingsReader { file_len }
    }

    /// Read only the document frequency of the block at `offset`.
    pub fn document_frequency<R: Read + Seek>(&self, input: &mut R, offset: u64) -> Result<u32> {
        let mut cursor = BlockCursor::open(input, offset, self.file_len)?;
        cursor.read_u32("document frequency")
    }

    /// Decode the block at `offset`.
    ///
    /// With `include_positions` false, each posting's positions are consumed
    /// from the stream but not materialized.
    pub fn decode<R: Read + Seek>(
        &self,
        input: &mut R,
        offset: u64,
        include_positions: bool,
    ) -> Result<PostingsList> {
        let mut cursor = BlockCursor::open(input, offset, self.file_len)?;

        let df = cursor.read_u32("document frequency")?;
        cursor.ensure(df as u64 * MIN_POSTING_SIZE, "document list")?;

        let mut postings = Vec::with_capacity(df as usize);
        let mut previous_doc_id = 0u32;

        for _ in 0..df {
            let gap = cursor.read_u32("document gap")?;
            let doc_id = previous_doc_id.checked_add(gap).ok_or_else(|| {
                StemdexError::corrupt(format!(
                    "postings block at offset {offset}: document ID overflows after {previous_doc_id} + {gap}"
                ))
            })?;
            previous_doc_id = doc_id;

            let term_frequency = cursor.read_u32("term frequency")?;
            let positions_len = term_frequency as u64 * U32_SIZE;

            let positions = if include_positions {
                cursor.ensure(positions_len, "position list")?;
                let mut positions = Vec::with_capacity(term_frequency as usize);
                let mut previous_position = 0u32;
                for _ in 0..term_frequency {
                    let gap = cursor.read_u32("position gap")?;
                    previous_position = previous_position.checked_add(gap).ok_or_else(|| {
                        StemdexError::corrupt(format!(
                            "postings block at offset {offset}: position overflows in document {doc_id}"
                        ))
                    })?;
                    positions.push(previous_position);
                }
                Some(positions)
            } else {
                cursor.skip(positions_len, "position list")?;
                None
            };

            postings.push(Posting {
                doc_id,
                term_frequency,
                positions,
            });
        }

        Ok(PostingsList::new(postings))
    }
}
