//! Filler alphabet for the grid
//!
//! ASCII punctuation plus space. Letters and digits are left out so planted words
//! stand out, and so a word cell can never be mistaken for a bracket.

/// Printable symbols used to fill every non-word cell
pub const SYMBOLS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~', ' ',
];
