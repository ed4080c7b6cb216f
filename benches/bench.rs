//! Criterion benchmarks for stemdex.
//!
//! Covers the hot paths of a query:
//! - Porter stemming and query word normalization
//! - Vocabulary binary search
//! - Postings decoding with and without positions

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use stemdex::analysis::{PorterStemmer, Stemmer, normalize};
use stemdex::index::{PostingsReader, VocabularyIndex};
use stemdex::storage::{MemoryInput, StorageInput, codec};
use std::hint::black_box;

/// Generate test words for benchmarking.
fn generate_test_words(count: usize) -> Vec<String> {
    let words = [
        "caresses", "ponies", "motoring", "hopping", "relational", "conditional",
        "electrical", "hopefulness", "generalization", "adjustable", "controlling",
        "triplicate", "agreed", "troubled", "happy", "sensibility", "formality",
        "digitizer", "operator", "feudalism", "callousness", "revival", "allowance",
    ];

    (0..count)
        .map(|i| words[(i * 7) % words.len()].to_string())
        .collect()
}

/// Build an in-memory vocabulary of `count` sorted terms and a postings file
/// with one block per term.
fn build_index(count: usize) -> (VocabularyIndex, MemoryInput, MemoryInput, Vec<u64>) {
    let mut terms: Vec<String> = (0..count).map(|i| format!("term{i:06}")).collect();
    terms.sort();

    let mut vocab = Vec::new();
    let mut table = Vec::new();
    let mut postings = Vec::new();
    let mut offsets = Vec::with_capacity(count);

    codec::write_u32(&mut table, count as u32).unwrap();
    for (i, term) in terms.iter().enumerate() {
        offsets.push(postings.len() as u64);
        codec::write_u64(&mut table, vocab.len() as u64).unwrap();
        codec::write_u64(&mut table, postings.len() as u64).unwrap();
        vocab.extend_from_slice(term.as_bytes());

        let df = 1 + i % 50;
        codec::write_u32(&mut postings, df as u32).unwrap();
        for _ in 0..df {
            codec::write_u32(&mut postings, 3).unwrap();
            codec::write_u32(&mut postings, 4).unwrap();
            for _ in 0..4 {
                codec::write_u32(&mut postings, 11).unwrap();
            }
        }
    }

    let vocab = MemoryInput::new(vocab);
    let index = VocabularyIndex::read_table(&mut MemoryInput::new(table), vocab.size()).unwrap();
    (index, vocab, MemoryInput::new(postings), offsets)
}

/// Benchmark stemming and normalization.
fn bench_stemming(c: &mut Criterion) {
    let mut group = c.benchmark_group("stemming");

    let stemmer = PorterStemmer::new();
    let words = generate_test_words(1000);

    group.bench_function("stem_single_word", |b| {
        b.iter(|| black_box(stemmer.stem(black_box("generalization"))))
    });

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("stem_batch", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer.stem(black_box(word)));
            }
        })
    });

    group.bench_function("normalize_batch", |b| {
        b.iter(|| {
            for word in &words {
                black_box(normalize(black_box(word)));
            }
        })
    });

    group.finish();
}

/// Benchmark vocabulary search and postings decoding.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let (index, mut vocab, mut postings, offsets) = build_index(100_000);
    let reader = PostingsReader::new(postings.size());

    group.bench_function("locate_present_term", |b| {
        b.iter(|| black_box(index.locate(&mut vocab, black_box(b"term054321")).unwrap()))
    });

    group.bench_function("locate_absent_term", |b| {
        b.iter(|| black_box(index.locate(&mut vocab, black_box(b"term05432x")).unwrap()))
    });

    let offset = offsets[49];
    group.bench_function("decode_with_positions", |b| {
        b.iter(|| black_box(reader.decode(&mut postings, offset, true).unwrap()))
    });

    group.bench_function("decode_without_positions", |b| {
        b.iter(|| black_box(reader.decode(&mut postings, offset, false).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_stemming, bench_lookup);

criterion_main!(benches);
