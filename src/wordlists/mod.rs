//! Symbol and word banks
//!
//! Static data the generator draws from: the filler alphabet and the embedded
//! list of candidate words.

mod embedded;
pub mod loader;
mod symbols;

pub use embedded::{WORDS, WORDS_COUNT};
pub use symbols::SYMBOLS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 4, "Word '{word}' is not 4 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_distinct() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 48, "Expected 48 embedded words");
    }
}
