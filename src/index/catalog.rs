//! Document catalog: the display names behind document IDs.
//!
//! Document IDs in the postings file are positions in a list of names that the
//! index itself does not fully own. The list comes from a [`DocumentSource`]
//! consumed once at open time, and its order must match the numbering the
//! index builder used.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Result, StemdexError};

/// Enumerates document names in document-ID order.
pub trait DocumentSource: std::fmt::Debug {
    /// The names, where the name at position `i` belongs to document `i`.
    fn document_names(&self) -> Result<Vec<String>>;
}

/// Files in a directory whose names end with an extension, sorted by the
/// bytes of their names.
#[derive(Debug, Clone)]
pub struct DirectoryDocumentSource {
    directory: PathBuf,
    extension: String,
}

impl DirectoryDocumentSource {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(directory: P, extension: S) -> Self {
        DirectoryDocumentSource {
            directory: directory.into(),
            extension: extension.into(),
        }
    }
}

impl DocumentSource for DirectoryDocumentSource {
    fn document_names(&self) -> Result<Vec<String>> {
        let entries =
            fs::read_dir(&self.directory).map_err(|e| StemdexError::open(&self.directory, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StemdexError::open(&self.directory, e))?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Skipping document with non UTF-8 name {raw:?}");
                    continue;
                }
            };
            if name.ends_with(&self.extension) {
                names.push(name);
            }
        }

        names.sort_unstable();
        debug!(
            "Enumerated {} '{}' documents in {}",
            names.len(),
            self.extension,
            self.directory.display()
        );
        Ok(names)
    }
}

/// A JSON array of names persisted next to the index.
///
/// This pins the ID-to-name mapping at build time instead of relying on the
/// directory listing order at read time.
#[derive(Debug, Clone)]
pub struct ManifestDocumentSource {
    path: PathBuf,
}

impl ManifestDocumentSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ManifestDocumentSource { path: path.into() }
    }

    /// Write `names` as a manifest at `path`.
    pub fn write<P: AsRef<Path>>(path: P, names: &[String]) -> Result<()> {
        let json = serde_json::to_string_pretty(names)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl DocumentSource for ManifestDocumentSource {
    fn document_names(&self) -> Result<Vec<String>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| StemdexError::open(&self.path, e))?;
        serde_json::from_str(&content).map_err(|e| {
            StemdexError::corrupt(format!(
                "document manifest {} is not a JSON array of names: {e}",
                self.path.display()
            ))
        })
    }
}

impl DocumentSource for Vec<String> {
    fn document_names(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }
}

/// Document names indexed by document ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCatalog {
    names: Vec<String>,
}

impl DocumentCatalog {
    pub fn new(names: Vec<String>) -> Self {
        DocumentCatalog { names }
    }

    /// Build the catalog by consuming a document source once.
    pub fn from_source(source: &dyn DocumentSource) -> Result<Self> {
        Ok(DocumentCatalog::new(source.document_names()?))
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `doc_id` has a catalog entry.
    pub fn contains(&self, doc_id: u32) -> bool {
        (doc_id as usize) < self.names.len()
    }

    /// Name of document `doc_id`.
    pub fn name(&self, doc_id: u32) -> Option<&str> {
        self.names.get(doc_id as usize).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_source_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "Z.txt", "notes.md", "c.txt.bak", "vocab.bin"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let source = DirectoryDocumentSource::new(dir.path(), ".txt");
        let names = source.document_names().unwrap();

        // Byte order puts uppercase first.
        assert_eq!(names, vec!["Z.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_directory_source_missing_directory() {
        let dir = TempDir::new().unwrap();
        let source = DirectoryDocumentSource::new(dir.path().join("missing"), ".txt");

        assert!(matches!(
            source.document_names(),
            Err(StemdexError::Open { .. })
        ));
    }

    #[test]
    fn test_manifest_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let names = vec!["second.txt".to_string(), "first.txt".to_string()];
        ManifestDocumentSource::write(&path, &names).unwrap();

        let loaded = ManifestDocumentSource::new(&path).document_names().unwrap();
        assert_eq!(loaded, names);

        fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        let err = ManifestDocumentSource::new(&path)
            .document_names()
            .unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_catalog_lookup() {
        let source = vec!["a.txt".to_string(), "b.txt".to_string()];
        let catalog = DocumentCatalog::from_source(&source).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name(0), Some("a.txt"));
        assert_eq!(catalog.name(1), Some("b.txt"));
        assert_eq!(catalog.name(2), None);
        assert!(catalog.contains(1));
        assert!(!catalog.contains(2));
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["a.txt", "b.txt"]);
    }
}
