//! Core domain types for the puzzle
//!
//! Grid coordinates, planted words and lazy bracket matching. Everything here is
//! pure and free of randomness; generation lives in [`crate::generator`].

mod board;
pub mod brackets;
mod word;

pub use board::{
    BASE_ADDRESS, Board, CELLS_PER_ROW, COLUMN_COUNT, CellPos, MAX_START, ROW_COUNT, WORD_LEN,
    WordPlacement,
};
pub use brackets::{Span, find_lazy_match};
pub use word::{Word, WordError};
