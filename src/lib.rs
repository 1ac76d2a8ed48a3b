//! hexhack
//!
//! A memory-dump word hunt: a two-column grid of filler symbols hides eight
//! 4-letter words, one of them the secret. Clicking a wrong word reports how
//! many letters sit in the right place; clicking a bracket with a lazy match
//! removes a decoy.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexhack::core::CellPos;
//! use hexhack::generator::GridGenerator;
//! use hexhack::session::GameSession;
//! use hexhack::wordlists::{WORDS, loader::words_from_slice};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let bank = words_from_slice(WORDS);
//! let generator = GridGenerator::new(&bank).unwrap();
//! let mut session = GameSession::new(generator, StdRng::seed_from_u64(1));
//!
//! // Click the first letter of the secret
//! let first_letter = session.secret().placement.cells().next().unwrap();
//! for instruction in session.click(first_letter) {
//!     println!("{instruction:?}");
//! }
//! ```

// Core domain types
pub mod core;

// Board generation
pub mod generator;

// Game state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
