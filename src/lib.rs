//! # Stemdex
//!
//! Read-only access to a disk-resident positional inverted index.
//!
//! ## Features
//!
//! - Porter stemming shared by index builders and query paths
//! - Binary search over an on-disk vocabulary
//! - Gap-coded positional postings, with or without positions
//! - Index statistics and document catalog loaded at open
//! - Thread-safe lookups on one open handle
//!
//! ```no_run
//! use stemdex::analysis::normalize;
//! use stemdex::index::{DiskPositionalIndex, IndexReader};
//!
//! # fn main() -> stemdex::error::Result<()> {
//! let index = DiskPositionalIndex::open("corpus")?;
//! match index.lookup(&normalize("Running"))? {
//!     Some(postings) => {
//!         for posting in &postings {
//!             println!("{:?}", index.document_name(posting.doc_id));
//!         }
//!     }
//!     None => println!("no results"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod storage;

pub mod prelude {
    pub use crate::analysis::{normalize, stem};
    pub use crate::error::{Result, StemdexError};
    pub use crate::index::{DiskPositionalIndex, IndexConfig, IndexReader, PostingsList};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
