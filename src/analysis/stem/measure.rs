//! Porter "measure" predicates.
//!
//! A word is read as `[C](VC){m}[V]`, where `C` is a run of consonants and `V`
//! a run of vowels. A consonant run starts with any letter other than
//! `a e i o u` and continues with letters other than `a e i o u y`. A vowel run
//! starts with `a e i o u y` and continues with `a e i o u`. So `y` counts as a
//! vowel only when it opens a vowel run.
//!
//! The patterns are compiled once and shared for the lifetime of the process.

use std::sync::LazyLock;

use regex::Regex;

const CONSONANT_RUN: &str = "[^aeiou][^aeiouy]*";
const VOWEL_RUN: &str = "[aeiouy][aeiou]*";
const VOWEL: &str = "[aeiouy]";

fn compile(pattern: String) -> Regex {
    Regex::new(&pattern).expect("measure pattern should compile")
}

static MEASURE_GT_0: LazyLock<Regex> =
    LazyLock::new(|| compile(format!("^({CONSONANT_RUN})?{VOWEL_RUN}{CONSONANT_RUN}")));

static MEASURE_EQ_1: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        "^({CONSONANT_RUN})?{VOWEL_RUN}{CONSONANT_RUN}({VOWEL_RUN})?$"
    ))
});

static MEASURE_GT_1: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        "^({CONSONANT_RUN})?{VOWEL_RUN}{CONSONANT_RUN}{VOWEL_RUN}{CONSONANT_RUN}"
    ))
});

static HAS_VOWEL: LazyLock<Regex> =
    LazyLock::new(|| compile(format!("^({CONSONANT_RUN})?{VOWEL_RUN}")));

static SHORT_CVC: LazyLock<Regex> =
    LazyLock::new(|| compile(format!("^({CONSONANT_RUN}){VOWEL}[^aeiouwxy]$")));

/// `m(word) > 0`.
pub fn measure_gt_0(word: &str) -> bool {
    MEASURE_GT_0.is_match(word)
}

/// `m(word) == 1`, optionally followed by a trailing vowel run.
pub fn measure_eq_1(word: &str) -> bool {
    MEASURE_EQ_1.is_match(word)
}

/// `m(word) > 1`.
pub fn measure_gt_1(word: &str) -> bool {
    MEASURE_GT_1.is_match(word)
}

/// The word has a vowel run after its optional leading consonant run.
pub fn contains_vowel(word: &str) -> bool {
    HAS_VOWEL.is_match(word)
}

/// The word ends in two identical consonants other than `l`, `s`, `z` or `y`.
pub fn ends_double_consonant(word: &str) -> bool {
    match word.as_bytes() {
        [.., a, b] => a == b && !b"aeioulszy".contains(b),
        _ => false,
    }
}

/// The word is a consonant run, one vowel, and one final consonant that is not
/// `w`, `x` or `y`.
///
/// Such a word always has measure 1, so this answers "m == 1 and ends
/// consonant-vowel-consonant" in a single test.
pub fn ends_cvc_not_wxy(word: &str) -> bool {
    SHORT_CVC.is_match(word)
}
