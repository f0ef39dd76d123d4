pub mod assemble;
pub mod fuzzy;
pub mod levenshtein;
pub mod search;

pub use assemble::assemble_ranking;
pub use fuzzy::{is_close_match, LevenshteinMatcher};
pub use levenshtein::levenshtein;
pub use search::{find_matches, substitute_you, tokenize, RecognizedText};

/// Trait for deciding whether an OCR word is a given name token
pub trait NameMatcher: Send + Sync {
    /// Whether `word` should be treated as the same identity as `target`
    fn is_match(&self, word: &str, target: &str) -> bool;

    /// Get matcher name for logging
    fn name(&self) -> &str;
}
