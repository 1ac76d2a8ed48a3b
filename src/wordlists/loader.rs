//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping invalid entries and
/// repeated words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hexhack::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    Ok(words_from_slice(&lines))
}

/// Convert a string slice list to a Word vector
///
/// Invalid entries are skipped and only the first copy of a repeated word is kept,
/// so the bank always holds distinct words.
///
/// # Examples
/// ```
/// use hexhack::wordlists::loader::words_from_slice;
/// use hexhack::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::with_capacity(slice.len());
    for word in slice.iter().filter_map(|&s| Word::new(s).ok()) {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["word", "good", "have"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "word");
        assert_eq!(words[1].text(), "good");
        assert_eq!(words[2].text(), "have");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["word", "after", "abc", "", "wh3n", "good"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "word");
        assert_eq!(words[1].text(), "good");
    }

    #[test]
    fn words_from_slice_drops_repeats() {
        let words = words_from_slice(&["good", "GOOD", "hand", "good"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
