//! Error types for the stemdex library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StemdexError`] enum. A term that is absent from the vocabulary is not an
//! error: lookups report it as `Ok(None)`.
//!
//! # Examples
//!
//! ```
//! use stemdex::error::{Result, StemdexError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemdexError::corrupt("postings block truncated"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for stemdex operations.
#[derive(Error, Debug)]
pub enum StemdexError {
    /// I/O errors that happen after the index was opened.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required index file is missing or unreadable. The index handle is
    /// never returned when this happens.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Declared lengths exceed the available bytes, or decoded data refers to
    /// something that does not exist.
    #[error("Corrupt index: {0}")]
    CorruptIndex(String),

    /// The index handle was closed before the operation.
    #[error("Index is closed")]
    Closed,

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with StemdexError.
pub type Result<T> = std::result::Result<T, StemdexError>;

impl StemdexError {
    /// Create a new open error for the given path.
    pub fn open<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        StemdexError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a new corrupt index error.
    pub fn corrupt<S: Into<String>>(msg: S) -> Self {
        StemdexError::CorruptIndex(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemdexError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemdexError::Other(msg.into())
    }

    /// Whether this error marks damaged index data rather than an environment
    /// problem.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StemdexError::CorruptIndex(_))
    }
}
