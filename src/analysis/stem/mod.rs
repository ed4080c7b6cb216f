//! Stemming: reducing tokens to a canonical stem.

pub mod measure;
pub mod porter;

pub use porter::PorterStemmer;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

static PORTER: PorterStemmer = PorterStemmer;

/// Stem a lowercase ASCII token with the Porter stemmer.
///
/// Needs no open index. Tokens shorter than three characters, or containing
/// anything other than lowercase ASCII letters, come back unchanged.
pub fn stem(token: &str) -> String {
    PORTER.stem(token)
}
