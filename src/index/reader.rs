//! Disk-resident positional index.

use std::path::{Path, PathBuf};

use log::{debug, info};
use parking_lot::Mutex;

use crate::error::{Result, StemdexError};
use crate::index::catalog::{
    DirectoryDocumentSource, DocumentCatalog, DocumentSource, ManifestDocumentSource,
};
use crate::index::config::IndexConfig;
use crate::index::postings::{PostingsList, PostingsReader};
use crate::index::statistics::IndexStatistics;
use crate::index::vocabulary::VocabularyIndex;
use crate::index::{
    CATALOG_FILE, MOST_FREQUENT_FILE, POSTINGS_FILE, STATISTICS_FILE, VOCAB_FILE, VOCAB_TABLE_FILE,
};
use crate::storage::{FileInput, StorageInput};

/// Trait for positional index readers.
pub trait IndexReader: Send + Sync + std::fmt::Debug {
    /// Number of distinct terms.
    fn term_count(&self) -> usize;

    /// Number of documents in the catalog.
    fn document_count(&self) -> usize;

    /// Postings of `term`, or `None` if the term is not in the vocabulary.
    fn postings(&self, term: &str, include_positions: bool) -> Result<Option<PostingsList>>;

    /// Display name of document `doc_id`.
    fn document_name(&self, doc_id: u32) -> Option<&str>;

    /// Index-wide statistics.
    fn statistics(&self) -> &IndexStatistics;

    /// Release the underlying streams.
    fn close(&mut self) -> Result<()>;

    /// Check if the reader is closed.
    fn is_closed(&self) -> bool;

    /// Positional postings of `term`.
    fn lookup(&self, term: &str) -> Result<Option<PostingsList>> {
        self.postings(term, true)
    }
}

/// A read-only index whose vocabulary and postings stay on disk.
///
/// The vocabulary table, statistics and document catalog are loaded once at
/// open. Each of the two streams sits behind its own lock, held from the seek
/// to the last read of an operation, so one handle can be shared across
/// threads.
#[derive(Debug)]
pub struct DiskPositionalIndex {
    path: PathBuf,
    config: IndexConfig,
    vocabulary: VocabularyIndex,
    postings_reader: PostingsReader,
    vocab_input: Mutex<Option<FileInput>>,
    postings_input: Mutex<Option<FileInput>>,
    catalog: DocumentCatalog,
    statistics: IndexStatistics,
}

impl DiskPositionalIndex {
    /// Open the index stored in `path` with the default configuration.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_config(path, IndexConfig::default())
    }

    /// Open the index stored in `path`.
    ///
    /// Documents are taken from `catalog.json` when the index carries one,
    /// otherwise from the files in `path` ending with the configured extension.
    pub fn open_with_config<P: AsRef<Path>>(path: P, config: IndexConfig) -> Result<Self> {
        let path = path.as_ref();
        let manifest = path.join(CATALOG_FILE);
        if manifest.is_file() {
            let source = ManifestDocumentSource::new(manifest);
            Self::open_with_source(path, config, &source)
        } else {
            let source = DirectoryDocumentSource::new(path, config.document_extension.clone());
            Self::open_with_source(path, config, &source)
        }
    }

    /// Open the index stored in `path`, numbering documents in the order
    /// `source` yields them.
    pub fn open_with_source<P: AsRef<Path>>(
        path: P,
        config: IndexConfig,
        source: &dyn DocumentSource,
    ) -> Result<Self> {
        config.validate()?;
        let path = path.as_ref().to_path_buf();
        let open = |name: &str| FileInput::open(path.join(name), config.buffer_size);

        let vocab_input = open(VOCAB_FILE)?;
        let postings_input = open(POSTINGS_FILE)?;

        let mut table = open(VOCAB_TABLE_FILE)?;
        let vocabulary = VocabularyIndex::read_table(&mut table, vocab_input.size())?;
        table.close()?;

        let mut stats = open(STATISTICS_FILE)?;
        let mut words = open(MOST_FREQUENT_FILE)?;
        let statistics = IndexStatistics::read(&mut stats, &mut words)?;
        stats.close()?;
        words.close()?;

        let catalog = DocumentCatalog::from_source(source)?;

        info!(
            "Opened index at {}: {} terms, {} documents",
            path.display(),
            vocabulary.len(),
            catalog.len()
        );

        Ok(DiskPositionalIndex {
            path,
            postings_reader: PostingsReader::new(postings_input.size()),
            config,
            vocabulary,
            vocab_input: Mutex::new(Some(vocab_input)),
            postings_input: Mutex::new(Some(postings_input)),
            catalog,
            statistics,
        })
    }

    /// Postings offset of `term`, or `None` if the term is absent.
    pub fn locate(&self, term: &str) -> Result<Option<u64>> {
        let mut guard = self.vocab_input.lock();
        let input = guard.as_mut().ok_or(StemdexError::Closed)?;
        self.vocabulary.locate(input, term.as_bytes())
    }

    /// Number of documents containing `term`; 0 when the term is absent.
    ///
    /// Reads only the leading count of the postings block.
    pub fn document_frequency(&self, term: &str) -> Result<u32> {
        let Some(offset) = self.locate(term)? else {
            return Ok(0);
        };
        let mut guard = self.postings_input.lock();
        let input = guard.as_mut().ok_or(StemdexError::Closed)?;
        self.postings_reader.document_frequency(input, offset)
    }

    /// Every term in vocabulary order.
    pub fn terms(&self) -> Result<Vec<String>> {
        let mut guard = self.vocab_input.lock();
        let input = guard.as_mut().ok_or(StemdexError::Closed)?;

        let mut terms = Vec::with_capacity(self.vocabulary.len());
        for index in 0..self.vocabulary.len() {
            let bytes = self.vocabulary.term_at(input, index)?;
            let term = String::from_utf8(bytes).map_err(|e| {
                StemdexError::corrupt(format!("term {index} is not valid UTF-8: {e}"))
            })?;
            terms.push(term);
        }
        Ok(terms)
    }

    fn check_document_ids(&self, term: &str, list: &PostingsList) -> Result<()> {
        if let Some(posting) = list.iter().find(|p| !self.catalog.contains(p.doc_id)) {
            return Err(StemdexError::corrupt(format!(
                "postings of {term:?} refer to document {} but the catalog holds {} documents",
                posting.doc_id,
                self.catalog.len()
            )));
        }
        Ok(())
    }

    pub fn catalog(&self) -> &DocumentCatalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    /// Directory the index was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

impl IndexReader for DiskPositionalIndex {
    fn term_count(&self) -> usize {
        self.vocabulary.len()
    }

    fn document_count(&self) -> usize {
        self.catalog.len()
    }

    fn postings(&self, term: &str, include_positions: bool) -> Result<Option<PostingsList>> {
        let Some(offset) = self.locate(term)? else {
            debug!("Term {term:?} not in vocabulary");
            return Ok(None);
        };

        let list = {
            let mut guard = self.postings_input.lock();
            let input = guard.as_mut().ok_or(StemdexError::Closed)?;
            self.postings_reader.decode(input, offset, include_positions)?
        };

        if self.config.validate_document_ids {
            self.check_document_ids(term, &list)?;
        }

        debug!("Term {term:?}: {} postings at offset {offset}", list.len());
        Ok(Some(list))
    }

    fn document_name(&self, doc_id: u32) -> Option<&str> {
        self.catalog.name(doc_id)
    }

    fn statistics(&self) -> &IndexStatistics {
        &self.statistics
    }

    fn close(&mut self) -> Result<()> {
        for slot in [self.vocab_input.get_mut(), self.postings_input.get_mut()] {
            if let Some(mut input) = slot.take() {
                input.close()?;
            }
        }
        debug!("Closed index at {}", self.path.display());
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.vocab_input.lock().is_none()
    }
}
