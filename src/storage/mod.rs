//! Read-only storage layer for index files.
//!
//! Index files are consumed through the [`StorageInput`] trait so the vocabulary
//! and postings decoders can run against an open file or an in-memory buffer.
//! Every multi-byte integer goes through [`codec`].

pub mod codec;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use file::*;
pub use memory::*;
pub use traits::*;
