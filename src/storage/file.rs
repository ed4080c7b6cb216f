//! File-based storage input.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Result, StemdexError};
use crate::storage::traits::StorageInput;

/// A buffered, read-only file input.
#[derive(Debug)]
pub struct FileInput {
    reader: BufReader<File>,
    size: u64,
    path: PathBuf,
}

impl FileInput {
    /// Open a file for reading.
    ///
    /// Failures to open or stat the file are reported as
    /// [`StemdexError::Open`] carrying the offending path.
    pub fn open<P: AsRef<Path>>(path: P, buffer_size: usize) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| StemdexError::open(&path, e))?;
        let size = file
            .metadata()
            .map_err(|e| StemdexError::open(&path, e))?
            .len();

        let reader = BufReader::with_capacity(buffer_size, file);

        Ok(FileInput { reader, size, path })
    }

    /// Path this input was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for FileInput {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Seek for FileInput {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.reader.seek(pos)
    }
}

impl StorageInput for FileInput {
    fn size(&self) -> u64 {
        self.size
    }

    fn close(&mut self) -> Result<()> {
        // The file will be closed when the BufReader is dropped
        Ok(())
    }
}
