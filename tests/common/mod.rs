//! Test-side writer for on-disk index fixtures.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use stemdex::analysis::normalize;
use stemdex::index::statistics::MOST_FREQUENT_TERMS;
use stemdex::index::{
    MOST_FREQUENT_FILE, POSTINGS_FILE, STATISTICS_FILE, VOCAB_FILE, VOCAB_TABLE_FILE,
};
use stemdex::storage::codec;

/// `(doc_id, positions)` pairs of one term, in document order.
pub type GroundTruth = BTreeMap<String, Vec<(u32, Vec<u32>)>>;

pub const DOCUMENTS: [(&str, &str); 4] = [
    ("a.txt", "The quick brown fox jumps over the lazy dog"),
    ("b.txt", "Ponies are running and jumping over fences"),
    ("c.txt", "The dog was running while the fox was sleeping"),
    ("d.txt", "Lazy ponies sleep; quick dogs run."),
];

/// Write `documents` into `dir` and build an index over them.
///
/// Document IDs follow the byte order of the names. Terms listed in
/// `empty_terms` are added to the vocabulary with an empty postings block.
pub fn build_index(dir: &Path, documents: &[(&str, &str)], empty_terms: &[&str]) -> GroundTruth {
    let mut documents = documents.to_vec();
    documents.sort_by(|a, b| a.0.cmp(b.0));

    let mut truth = GroundTruth::new();
    for (doc_id, (name, text)) in documents.iter().enumerate() {
        fs::write(dir.join(name), text).unwrap();

        let mut position = 0u32;
        for word in text.split_whitespace() {
            let term = normalize(word);
            if term.is_empty() {
                continue;
            }
            let postings = truth.entry(term).or_default();
            let seen_in_document = postings.last().is_some_and(|(id, _)| *id == doc_id as u32);
            if seen_in_document {
                postings.last_mut().unwrap().1.push(position);
            } else {
                postings.push((doc_id as u32, vec![position]));
            }
            position += 1;
        }
    }

    let mut blocks: BTreeMap<String, Vec<(u32, Vec<u32>)>> = truth.clone();
    for term in empty_terms {
        blocks.insert(term.to_string(), Vec::new());
    }

    write_index_files(dir, &blocks, documents.len());
    truth
}

/// Build the default fixture corpus.
pub fn build_default(dir: &Path) -> GroundTruth {
    build_index(dir, &DOCUMENTS, &[])
}

fn write_index_files(
    dir: &Path,
    blocks: &BTreeMap<String, Vec<(u32, Vec<u32>)>>,
    doc_count: usize,
) {
    let mut vocab = Vec::new();
    let mut table = Vec::new();
    let mut postings = Vec::new();

    codec::write_u32(&mut table, blocks.len() as u32).unwrap();
    for (term, list) in blocks {
        codec::write_u64(&mut table, vocab.len() as u64).unwrap();
        codec::write_u64(&mut table, postings.len() as u64).unwrap();
        vocab.extend_from_slice(term.as_bytes());
        encode_block(&mut postings, list);
    }

    fs::write(dir.join(VOCAB_FILE), &vocab).unwrap();
    fs::write(dir.join(VOCAB_TABLE_FILE), &table).unwrap();
    fs::write(dir.join(POSTINGS_FILE), &postings).unwrap();

    let mut by_frequency: Vec<(&String, usize)> =
        blocks.iter().map(|(term, list)| (term, list.len())).collect();
    by_frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total: usize = blocks.values().map(Vec::len).sum();
    let mut stats = Vec::new();
    let mut words = Vec::new();
    codec::write_u32(&mut stats, blocks.len() as u32).unwrap();
    codec::write_u32(&mut stats, (total / blocks.len().max(1)) as u32).unwrap();
    for (term, df) in by_frequency.iter().take(MOST_FREQUENT_TERMS) {
        codec::write_u32(&mut stats, term.len() as u32).unwrap();
        codec::write_f64(&mut stats, *df as f64 / doc_count as f64).unwrap();
        words.extend_from_slice(term.as_bytes());
    }
    codec::write_u64(&mut stats, (vocab.len() + table.len() + postings.len()) as u64).unwrap();

    fs::write(dir.join(STATISTICS_FILE), &stats).unwrap();
    fs::write(dir.join(MOST_FREQUENT_FILE), &words).unwrap();
}

fn encode_block(buffer: &mut Vec<u8>, list: &[(u32, Vec<u32>)]) {
    codec::write_u32(buffer, list.len() as u32).unwrap();
    let mut previous_doc = 0;
    for (doc_id, positions) in list {
        codec::write_u32(buffer, doc_id - previous_doc).unwrap();
        previous_doc = *doc_id;
        codec::write_u32(buffer, positions.len() as u32).unwrap();
        let mut previous_position = 0;
        for position in positions {
            codec::write_u32(buffer, position - previous_position).unwrap();
            previous_position = *position;
        }
    }
}
