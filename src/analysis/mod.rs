//! Term normalization.
//!
//! Index builders and query paths must turn raw words into terms the same way,
//! otherwise lookups never match. [`normalize`] is that shared path: strip
//! punctuation, lowercase, stem.

use std::sync::LazyLock;

use regex::Regex;

pub mod stem;

pub use stem::{PorterStemmer, Stemmer, stem};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-\w\s]").expect("non-word pattern should compile"));

/// Remove every character that is not a word character, whitespace or `-`,
/// then lowercase.
pub fn clean(raw: &str) -> String {
    NON_WORD.replace_all(raw, "").trim().to_lowercase()
}

/// Turn a raw word into the term stored in the vocabulary.
pub fn normalize(raw: &str) -> String {
    stem(&clean(raw))
}
