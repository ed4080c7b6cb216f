//! In-memory storage input.

use std::io::{Cursor, Read, Seek, SeekFrom};

use crate::error::Result;
use crate::storage::traits::StorageInput;

/// A storage input backed by an owned byte buffer.
#[derive(Debug, Clone)]
pub struct MemoryInput {
    cursor: Cursor<Vec<u8>>,
    size: u64,
}

impl MemoryInput {
    /// Create a new input over the given bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let size = data.len() as u64;
        MemoryInput {
            cursor: Cursor::new(data),
            size,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }
}

impl Read for MemoryInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for MemoryInput {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl StorageInput for MemoryInput {
    fn size(&self) -> u64 {
        self.size
    }

    fn close(&mut self) -> Result<()> {
        // Nothing to close for memory input
        Ok(())
    }
}
