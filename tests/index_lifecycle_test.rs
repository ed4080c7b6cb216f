mod common;

use std::fs::{self, OpenOptions};

use stemdex::error::StemdexError;
use stemdex::index::catalog::ManifestDocumentSource;
use stemdex::index::{
    CATALOG_FILE, DiskPositionalIndex, IndexConfig, IndexReader, MOST_FREQUENT_FILE, POSTINGS_FILE,
    STATISTICS_FILE, VOCAB_FILE, VOCAB_TABLE_FILE,
};

use tempfile::tempdir;

#[test]
fn test_missing_file_fails_open() {
    for file in [
        VOCAB_FILE,
        POSTINGS_FILE,
        VOCAB_TABLE_FILE,
        STATISTICS_FILE,
        MOST_FREQUENT_FILE,
    ] {
        let dir = tempdir().unwrap();
        common::build_default(dir.path());
        fs::remove_file(dir.path().join(file)).unwrap();

        match DiskPositionalIndex::open(dir.path()) {
            Err(StemdexError::Open { path, .. }) => assert_eq!(path, dir.path().join(file)),
            other => panic!("{file}: expected open error, got {other:?}"),
        }
    }
}

#[test]
fn test_truncated_statistics_fail_open() {
    let dir = tempdir().unwrap();
    common::build_default(dir.path());
    let stats = OpenOptions::new()
        .write(true)
        .open(dir.path().join(STATISTICS_FILE))
        .unwrap();
    stats.set_len(20).unwrap();

    let err = DiskPositionalIndex::open(dir.path()).unwrap_err();
    assert!(err.is_corrupt());
}

#[test]
fn test_truncated_postings_fail_only_the_affected_lookup() {
    let dir = tempdir().unwrap();
    let truth = common::build_default(dir.path());
    let postings = OpenOptions::new()
        .write(true)
        .open(dir.path().join(POSTINGS_FILE))
        .unwrap();
    let len = postings.metadata().unwrap().len();
    postings.set_len(len - 2).unwrap();

    let index = DiskPositionalIndex::open(dir.path()).unwrap();
    let first = truth.keys().next().unwrap();
    let last = truth.keys().last().unwrap();

    assert!(index.lookup(last).unwrap_err().is_corrupt());
    assert!(index.postings(last, false).unwrap_err().is_corrupt());
    // The handle stays usable.
    assert!(index.lookup(first).unwrap().is_some());
}

#[test]
fn test_document_outside_catalog_is_corrupt() {
    let dir = tempdir().unwrap();
    common::build_default(dir.path());

    // "run" occurs in the last document, which this catalog lacks.
    let short = vec!["a.txt".to_string(), "b.txt".to_string(), "c.txt".to_string()];
    let index =
        DiskPositionalIndex::open_with_source(dir.path(), IndexConfig::default(), &short).unwrap();

    assert!(index.lookup("run").unwrap_err().is_corrupt());
    assert!(index.lookup("brown").unwrap().is_some());

    let config = IndexConfig {
        validate_document_ids: false,
        ..Default::default()
    };
    let index = DiskPositionalIndex::open_with_source(dir.path(), config, &short).unwrap();
    let run = index.lookup("run").unwrap().unwrap();
    assert_eq!(index.document_name(run.doc_ids()[2]), None);
}

#[test]
fn test_catalog_manifest_takes_precedence() {
    let dir = tempdir().unwrap();
    common::build_default(dir.path());

    let names: Vec<String> = ["d.txt", "c.txt", "b.txt", "a.txt"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    ManifestDocumentSource::write(dir.path().join(CATALOG_FILE), &names).unwrap();

    let index = DiskPositionalIndex::open(dir.path()).unwrap();
    assert_eq!(index.document_name(0), Some("d.txt"));
    assert_eq!(index.document_name(3), Some("a.txt"));
}

#[test]
fn test_custom_document_extension() {
    let dir = tempdir().unwrap();
    common::build_default(dir.path());
    fs::write(dir.path().join("extra.md"), "not indexed").unwrap();

    let config = IndexConfig {
        document_extension: ".md".to_string(),
        validate_document_ids: false,
        ..Default::default()
    };
    let index = DiskPositionalIndex::open_with_config(dir.path(), config).unwrap();
    assert_eq!(index.document_count(), 1);
    assert_eq!(index.document_name(0), Some("extra.md"));
}

#[test]
fn test_close_releases_streams() {
    let dir = tempdir().unwrap();
    common::build_default(dir.path());
    let mut index = DiskPositionalIndex::open(dir.path()).unwrap();

    assert!(!index.is_closed());
    index.close().unwrap();
    assert!(index.is_closed());

    assert!(matches!(index.lookup("fox"), Err(StemdexError::Closed)));
    assert!(matches!(index.terms(), Err(StemdexError::Closed)));
    // In-memory parts outlive the streams.
    assert_eq!(index.document_name(0), Some("a.txt"));
    assert!(index.statistics().term_count > 0);

    // Closing twice is harmless.
    index.close().unwrap();
}

#[test]
fn test_handle_exposes_loaded_parts() {
    let dir = tempdir().unwrap();
    let truth = common::build_default(dir.path());
    let config = IndexConfig {
        buffer_size: 64,
        ..Default::default()
    };
    let index = DiskPositionalIndex::open_with_config(dir.path(), config.clone()).unwrap();

    assert_eq!(index.path(), dir.path());
    assert_eq!(index.config(), &config);
    assert_eq!(index.vocabulary().len(), truth.len());

    let names: Vec<&str> = index.catalog().iter().collect();
    let expected: Vec<&str> = common::DOCUMENTS.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, expected);

    // The first term located through the handle matches the table's first span.
    let first = truth.keys().next().unwrap();
    let (offset, len) = index.vocabulary().term_span(0).unwrap();
    assert_eq!((offset, len), (0, first.len()));
    assert!(index.locate(first).unwrap().is_some());
}

#[test]
fn test_reader_as_trait_object() {
    let dir = tempdir().unwrap();
    common::build_default(dir.path());
    let reader: Box<dyn IndexReader> = Box::new(DiskPositionalIndex::open(dir.path()).unwrap());

    let fox = reader.lookup("fox").unwrap().unwrap();
    assert_eq!(fox.doc_ids(), vec![0, 2]);
    assert!(reader.lookup("wolf").unwrap().is_none());
}
