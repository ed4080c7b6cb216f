//! Storage abstraction trait.

use std::io::{Read, Seek};

use crate::error::Result;

/// A trait for reading data from storage.
///
/// Inputs are seekable byte streams with a known length. The index never
/// writes through this trait.
pub trait StorageInput: Read + Seek + Send + std::fmt::Debug {
    /// Get the size of the input stream in bytes.
    fn size(&self) -> u64;

    /// Close the input stream.
    fn close(&mut self) -> Result<()>;
}

// Implement StorageInput for Box<dyn StorageInput> to allow trait objects
impl StorageInput for Box<dyn StorageInput> {
    fn size(&self) -> u64 {
        self.as_ref().size()
    }

    fn close(&mut self) -> Result<()> {
        self.as_mut().close()
    }
}
