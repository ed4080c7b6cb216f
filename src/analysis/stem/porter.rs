//! Porter stemming algorithm implementation.
//!
//! The stemmer applies a fixed pipeline of suffix rewrites. Each step commits
//! its result before the next one runs:
//!
//! 1. Plurals (`sses`, `ies`, `s`), then `eed`/`ed`/`ing` with a clean-up pass
//!    when `ed` or `ing` was removed, then final `y` → `i`.
//! 2. `ational` → `ate`, `tional` → `tion`, etc.
//! 3. `icate` → `ic`, `ative` → "", etc.
//! 4. Remove `al`, `ance`, `ence`, etc. from long stems.
//! 5. Remove a final `e` and reduce a final `ll`.
//!
//! Within steps 2, 3 and 4 the first rule whose suffix matches decides the
//! outcome: if its condition fails the word is left alone and no later rule
//! of that step is tried. Index builders and query paths must agree on every
//! detail of this order, or terms will never match.
//!
//! # Examples
//!
//! ```
//! use stemdex::analysis::stem::Stemmer;
//! use stemdex::analysis::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("caresses"), "caress");
//! assert_eq!(stemmer.stem("hopping"), "hop");
//! assert_eq!(stemmer.stem("happy"), "happi");
//! ```

use crate::analysis::stem::Stemmer;
use crate::analysis::stem::measure::{
    contains_vowel, ends_cvc_not_wxy, ends_double_consonant, measure_eq_1, measure_gt_0,
    measure_gt_1,
};
use StemCondition::{MeasureGt0, MeasureGt1, MeasureGt1EndsSOrT};

/// Words shorter than this are never stemmed.
pub const MIN_STEM_LENGTH: usize = 3;

/// Condition the remaining stem must satisfy for a suffix rule to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StemCondition {
    MeasureGt0,
    MeasureGt1,
    /// `m > 1` and the stem ends in `s` or `t`.
    MeasureGt1EndsSOrT,
}

impl StemCondition {
    fn holds(self, stem: &str) -> bool {
        match self {
            StemCondition::MeasureGt0 => measure_gt_0(stem),
            StemCondition::MeasureGt1 => measure_gt_1(stem),
            StemCondition::MeasureGt1EndsSOrT => {
                measure_gt_1(stem) && (stem.ends_with('s') || stem.ends_with('t'))
            }
        }
    }
}

/// A single `suffix → replacement` rewrite guarded by a stem condition.
#[derive(Debug, Clone, Copy)]
struct SuffixRule {
    suffix: &'static str,
    replacement: &'static str,
    condition: StemCondition,
}

const fn rule(
    suffix: &'static str,
    replacement: &'static str,
    condition: StemCondition,
) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        condition,
    }
}

static STEP2_RULES: [SuffixRule; 21] = [
    rule("ational", "ate", MeasureGt0),
    rule("tional", "tion", MeasureGt0),
    rule("enci", "ence", MeasureGt0),
    rule("anci", "ance", MeasureGt0),
    rule("izer", "ize", MeasureGt0),
    rule("bli", "ble", MeasureGt0),
    rule("logi", "log", MeasureGt0),
    rule("alli", "al", MeasureGt0),
    rule("entli", "ent", MeasureGt0),
    rule("eli", "e", MeasureGt0),
    rule("ousli", "ous", MeasureGt0),
    rule("ization", "ize", MeasureGt0),
    rule("ation", "ate", MeasureGt0),
    rule("ator", "ate", MeasureGt0),
    rule("alism", "al", MeasureGt0),
    rule("iveness", "ive", MeasureGt0),
    rule("fulness", "ful", MeasureGt0),
    rule("ousness", "ous", MeasureGt0),
    rule("aliti", "al", MeasureGt0),
    rule("iviti", "ive", MeasureGt0),
    rule("biliti", "ble", MeasureGt0),
];

static STEP3_RULES: [SuffixRule; 7] = [
    rule("icate", "ic", MeasureGt0),
    rule("ative", "", MeasureGt0),
    rule("alize", "al", MeasureGt0),
    rule("iciti", "ic", MeasureGt0),
    rule("ical", "ic", MeasureGt0),
    rule("ful", "", MeasureGt0),
    rule("ness", "", MeasureGt0),
];

static STEP4_RULES: [SuffixRule; 19] = [
    rule("al", "", MeasureGt1),
    rule("ance", "", MeasureGt1),
    rule("ence", "", MeasureGt1),
    rule("er", "", MeasureGt1),
    rule("ic", "", MeasureGt1),
    rule("able", "", MeasureGt1),
    rule("ible", "", MeasureGt1),
    rule("ant", "", MeasureGt1),
    rule("ement", "", MeasureGt1),
    rule("ment", "", MeasureGt1),
    rule("ent", "", MeasureGt1),
    rule("ion", "", MeasureGt1EndsSOrT),
    rule("ou", "", MeasureGt1),
    rule("ism", "", MeasureGt1),
    rule("ate", "", MeasureGt1),
    rule("iti", "", MeasureGt1),
    rule("ous", "", MeasureGt1),
    rule("ive", "", MeasureGt1),
    rule("ize", "", MeasureGt1),
];

/// Apply the first rule whose suffix matches, if its condition holds.
fn apply_first_match(word: &mut String, rules: &[SuffixRule]) {
    for rule in rules {
        if let Some(stem) = word.strip_suffix(rule.suffix) {
            if rule.condition.holds(stem) {
                let keep = stem.len();
                word.truncate(keep);
                word.push_str(rule.replacement);
            }
            return;
        }
    }
}

/// Porter stemmer over lowercase ASCII words.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Whether the stemmer rewrites this word at all.
    ///
    /// Words that are too short or contain anything but lowercase ASCII
    /// letters pass through unchanged.
    pub fn accepts(word: &str) -> bool {
        word.len() >= MIN_STEM_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Step 1a: plurals.
    fn step1a(word: &mut String) {
        if word.ends_with("sses") || word.ends_with("ies") {
            word.truncate(word.len() - 2);
        } else if word.ends_with('s') && !word.ends_with("ss") {
            word.pop();
        }
    }

    /// Step 1b: `eed`, `ed`, `ing`. Returns whether `ed` or `ing` was removed.
    fn step1b(word: &mut String) -> bool {
        if let Some(stem) = word.strip_suffix("eed") {
            if measure_gt_0(stem) {
                word.pop();
            }
            return false;
        }

        for suffix in ["ed", "ing"] {
            if let Some(stem) = word.strip_suffix(suffix) {
                if contains_vowel(stem) {
                    let keep = stem.len();
                    word.truncate(keep);
                    return true;
                }
                return false;
            }
        }

        false
    }

    /// Clean-up after `ed`/`ing` removal.
    fn step1b_extra(word: &mut String) {
        if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
            word.push('e');
        } else if ends_double_consonant(word) {
            word.pop();
        } else if measure_eq_1(word) && ends_cvc_not_wxy(word) {
            word.push('e');
        }
    }

    /// Step 1c: final `y` → `i`.
    fn step1c(word: &mut String) {
        if let Some(stem) = word.strip_suffix('y') {
            if contains_vowel(stem) {
                word.pop();
                word.push('i');
            }
        }
    }

    /// Step 5: final `e` and `ll`.
    fn step5(word: &mut String) {
        if let Some(stem) = word.strip_suffix('e') {
            if measure_gt_1(stem) || (measure_eq_1(stem) && !ends_cvc_not_wxy(stem)) {
                word.pop();
            }
        }

        if word.ends_with("ll") && measure_gt_1(word) {
            word.pop();
        }
    }

    fn step1(word: &mut String) {
        Self::step1a(word);
        if Self::step1b(word) {
            Self::step1b_extra(word);
        }
        Self::step1c(word);
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if !Self::accepts(word) {
            return word.to_string();
        }

        let mut word = word.to_string();

        Self::step1(&mut word);
        apply_first_match(&mut word, &STEP2_RULES);
        apply_first_match(&mut word, &STEP3_RULES);
        apply_first_match(&mut word, &STEP4_RULES);
        Self::step5(&mut word);

        word
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
