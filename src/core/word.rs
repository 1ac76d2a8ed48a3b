//! Planted word representation
//!
//! A Word stores a 4-letter lowercase word. Only ASCII letters are accepted, which keeps
//! word cells disjoint from the punctuation used as grid filler (and so from brackets).

use super::board::WORD_LEN;
use std::fmt;

/// A 4-letter word that can be planted in the grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 4
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hexhack::core::Word;
    ///
    /// let word = Word::new("GOOD").unwrap();
    /// assert_eq!(word.text(), "good");
    ///
    /// assert!(Word::new("after").is_err());
    /// assert!(Word::new("g0od").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Iterate the letters as `char`s, in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().map(|&b| char::from(b))
    }

    /// Count the positions where both words hold the same letter
    ///
    /// This is the feedback a player gets for clicking a decoy: `0..=4`.
    ///
    /// # Examples
    /// ```
    /// use hexhack::core::Word;
    ///
    /// let guess = Word::new("gold").unwrap();
    /// let secret = Word::new("good").unwrap();
    /// assert_eq!(guess.likeness(&secret), 3);
    /// ```
    #[must_use]
    pub fn likeness(&self, other: &Self) -> u8 {
        self.chars
            .iter()
            .zip(other.chars.iter())
            .filter(|(a, b)| a == b)
            .count() as u8
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("good").unwrap();
        assert_eq!(word.text(), "good");
        assert_eq!(word.chars(), b"good");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("HAND").unwrap().text(), "hand");
        assert_eq!(Word::new("HaNd").unwrap().text(), "hand");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("after"),
            Err(WordError::InvalidLength(5))
        ));
        assert!(matches!(Word::new("abc"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_rejects_symbols_and_digits() {
        assert!(Word::new("go0d").is_err());
        assert!(Word::new("go d").is_err());
        assert!(Word::new("{go}").is_err());
        assert!(Word::new("héé").is_err());
    }

    #[test]
    fn letters_are_never_brackets() {
        let word = Word::new("time").unwrap();
        assert!(word.letters().all(|c| !crate::core::brackets::is_bracket(c)));
    }

    #[test]
    fn likeness_counts_positional_matches() {
        let secret = Word::new("good").unwrap();
        assert_eq!(Word::new("good").unwrap().likeness(&secret), 4);
        assert_eq!(Word::new("gold").unwrap().likeness(&secret), 3);
        assert_eq!(Word::new("hand").unwrap().likeness(&secret), 1);
        assert_eq!(Word::new("them").unwrap().likeness(&secret), 0);
    }

    #[test]
    fn likeness_ignores_letters_out_of_place() {
        // Same letters, every one shifted
        let a = Word::new("abcd").unwrap();
        let b = Word::new("bcda").unwrap();
        assert_eq!(a.likeness(&b), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("work").unwrap();
        assert_eq!(format!("{word}"), "work");
    }
}
