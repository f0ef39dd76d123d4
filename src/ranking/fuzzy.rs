use crate::ranking::levenshtein::levenshtein;
use crate::ranking::NameMatcher;

/// Tokens up to this many chars tolerate a single edit; longer ones two.
pub const SHORT_TOKEN_MAX_LEN: usize = 4;
pub const SHORT_TOKEN_TOLERANCE: usize = 1;
pub const LONG_TOKEN_TOLERANCE: usize = 2;

/// Whether an OCR `word` should count as the name token `target`.
///
/// Both sides are lowercased. Empty tokens never match: against an empty
/// string any one-letter OCR fragment would sit within tolerance.
pub fn is_close_match(word: &str, target: &str) -> bool {
    let a = word.to_lowercase();
    let b = target.to_lowercase();

    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let max_len = a.chars().count().max(b.chars().count());
    let dist = levenshtein(&a, &b);

    if max_len <= SHORT_TOKEN_MAX_LEN {
        dist <= SHORT_TOKEN_TOLERANCE
    } else {
        dist <= LONG_TOKEN_TOLERANCE
    }
}

/// Edit-distance matcher with the length-dependent tolerance
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinMatcher;

impl LevenshteinMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl NameMatcher for LevenshteinMatcher {
    fn is_match(&self, word: &str, target: &str) -> bool {
        is_close_match(word, target)
    }

    fn name(&self) -> &str {
        "levenshtein"
    }
}
