//! Index reader configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemdexError};

fn default_buffer_size() -> usize {
    8192
}

fn default_document_extension() -> String {
    ".txt".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration for opening a [`DiskPositionalIndex`](super::DiskPositionalIndex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Read buffer capacity for the vocabulary and postings streams.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// File name suffix of the documents listed in the catalog.
    #[serde(default = "default_document_extension")]
    pub document_extension: String,

    /// Check every decoded document ID against the catalog.
    #[serde(default = "default_true")]
    pub validate_document_ids: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            buffer_size: default_buffer_size(),
            document_extension: default_document_extension(),
            validate_document_ids: true,
        }
    }
}

impl IndexConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| StemdexError::open(path, e))?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(StemdexError::config("buffer_size must be greater than 0"));
        }
        if self.document_extension.is_empty() {
            return Err(StemdexError::config("document_extension must not be empty"));
        }
        Ok(())
    }
}
