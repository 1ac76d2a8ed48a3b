//! Procedural board generation
//!
//! Fills a fresh grid with filler symbols, plants words under a spacing
//! constraint and picks one of them as the secret. All randomness comes from
//! the caller's RNG, so a seeded `StdRng` reproduces a board exactly.

use crate::core::{Board, COLUMN_COUNT, MAX_START, ROW_COUNT, Word, WordPlacement};
use crate::wordlists::SYMBOLS;
use rand::Rng;
use rand::seq::index;
use std::fmt;
use tracing::{debug, warn};

/// Words planted on a standard board
pub const DEFAULT_WORD_COUNT: usize = 8;

/// Placements in the same row segment must start more than this many cells apart
pub const SPACING: usize = 4;

/// A word together with where it was planted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub placement: WordPlacement,
    pub word: Word,
}

/// A freshly generated board and its planted words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub board: Board,
    /// Planted words in placement order
    pub words: Vec<PlacedWord>,
    pub secret: PlacedWord,
    /// Set when the spacing rule had to be dropped to place a word
    pub relaxed: bool,
}

impl Puzzle {
    /// Placements of every planted word
    pub fn placements(&self) -> impl Iterator<Item = WordPlacement> + '_ {
        self.words.iter().map(|w| w.placement)
    }

    /// Pairs of placements that break the spacing rule
    #[must_use]
    pub fn spacing_violations(&self) -> usize {
        self.count_pairs(|a, b| a.crowds(b, SPACING))
    }

    /// Pairs of placements that share at least one cell
    #[must_use]
    pub fn overlaps(&self) -> usize {
        self.count_pairs(|a, b| a.cells().any(|cell| b.contains(cell)))
    }

    fn count_pairs(&self, test: impl Fn(WordPlacement, WordPlacement) -> bool) -> usize {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(i, a)| self.words[i + 1..].iter().map(move |b| (a, b)))
            .filter(|(a, b)| test(a.placement, b.placement))
            .count()
    }
}

/// Error type for generator construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    EmptyBank,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBank => write!(f, "Word bank is empty, nothing to plant"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Builds puzzles from a borrowed word bank
#[derive(Debug, Clone, Copy)]
pub struct GridGenerator<'a> {
    bank: &'a [Word],
    word_count: usize,
}

impl<'a> GridGenerator<'a> {
    /// Create a generator planting [`DEFAULT_WORD_COUNT`] words per board
    ///
    /// # Errors
    /// Returns `GeneratorError::EmptyBank` if `bank` holds no words.
    pub const fn new(bank: &'a [Word]) -> Result<Self, GeneratorError> {
        if bank.is_empty() {
            return Err(GeneratorError::EmptyBank);
        }
        Ok(Self {
            bank,
            word_count: DEFAULT_WORD_COUNT,
        })
    }

    /// Plant `count` words per board (at least one)
    #[must_use]
    pub fn with_word_count(mut self, count: usize) -> Self {
        self.word_count = count.max(1);
        self
    }

    /// Words that will be planted on each board
    ///
    /// Smaller than the configured count when the bank is smaller.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count.min(self.bank.len())
    }

    #[must_use]
    pub const fn bank(&self) -> &'a [Word] {
        self.bank
    }

    /// Generate a new puzzle
    ///
    /// Draw order is fixed (filler column 0 then column 1, word sample,
    /// one placement per word, secret), which keeps generation reproducible
    /// for a given RNG stream.
    ///
    /// # Examples
    /// ```
    /// use hexhack::generator::GridGenerator;
    /// use hexhack::wordlists::{WORDS, loader::words_from_slice};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let bank = words_from_slice(WORDS);
    /// let generator = GridGenerator::new(&bank).unwrap();
    ///
    /// let a = generator.generate(&mut StdRng::seed_from_u64(7));
    /// let b = generator.generate(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// assert_eq!(a.words.len(), 8);
    /// ```
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Puzzle {
        let mut board = Board::from_fn(|_, _, _| SYMBOLS[rng.random_range(0..SYMBOLS.len())]);

        let chosen = index::sample(rng, self.bank.len(), self.word_count());
        let mut words: Vec<PlacedWord> = Vec::with_capacity(chosen.len());
        let mut relaxed = false;

        for idx in chosen {
            let word = &self.bank[idx];
            let mut candidates = spaced_candidates(&words);
            if candidates.is_empty() {
                warn!(word = %word, placed = words.len(), "no spaced slot left, relaxing spacing");
                relaxed = true;
                candidates = all_candidates().collect();
            }

            let placement = candidates[rng.random_range(0..candidates.len())];
            board.write_word(placement, word);
            words.push(PlacedWord {
                placement,
                word: word.clone(),
            });
        }

        // The bank is non-empty and word_count() >= 1, so at least one word was placed
        let secret = words[rng.random_range(0..words.len())].clone();
        debug!(words = words.len(), relaxed, "generated puzzle");

        Puzzle {
            board,
            words,
            secret,
            relaxed,
        }
    }
}

/// Every slot a word could occupy, column by column, row by row, left to right
fn all_candidates() -> impl Iterator<Item = WordPlacement> {
    (0..COLUMN_COUNT).flat_map(|column| {
        (0..ROW_COUNT).flat_map(move |row| {
            (0..=MAX_START).map(move |start| WordPlacement::new(column, row, start))
        })
    })
}

/// Slots that keep clear of every already-placed word
fn spaced_candidates(placed: &[PlacedWord]) -> Vec<WordPlacement> {
    all_candidates()
        .filter(|&candidate| {
            placed
                .iter()
                .all(|p| !p.placement.crowds(candidate, SPACING))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::brackets::is_bracket;
    use crate::core::{CELLS_PER_ROW, CellPos};
    use crate::wordlists::{WORDS, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn bank() -> Vec<Word> {
        words_from_slice(WORDS)
    }

    /// Distinct synthetic words: aaaa, aaab, ...
    fn synthetic_bank(count: usize) -> Vec<Word> {
        (0..count)
            .map(|n| {
                let text: String = (0..4)
                    .rev()
                    .map(|digit| char::from(b'a' + ((n / 26usize.pow(digit)) % 26) as u8))
                    .collect();
                Word::new(text).unwrap()
            })
            .collect()
    }

    #[test]
    fn plants_eight_distinct_words() {
        let bank = bank();
        let generator = GridGenerator::new(&bank).unwrap();

        for seed in 0..50 {
            let puzzle = generator.generate(&mut StdRng::seed_from_u64(seed));
            assert_eq!(puzzle.words.len(), 8);

            let texts: HashSet<&str> = puzzle.words.iter().map(|w| w.word.text()).collect();
            assert_eq!(texts.len(), 8, "seed {seed}: repeated word");

            let placements: HashSet<WordPlacement> = puzzle.placements().collect();
            assert_eq!(placements.len(), 8, "seed {seed}: repeated placement");
        }
    }

    #[test]
    fn words_are_written_in_one_row() {
        let bank = bank();
        let generator = GridGenerator::new(&bank).unwrap();

        for seed in 0..50 {
            let puzzle = generator.generate(&mut StdRng::seed_from_u64(seed));
            for placed in &puzzle.words {
                let p = placed.placement;
                assert!(p.start() <= MAX_START);
                assert!(p.start() + 4 <= CELLS_PER_ROW);
                assert_eq!(puzzle.board.text_at(p), placed.word.text());
            }
        }
    }

    #[test]
    fn exactly_one_secret_from_the_placed_words() {
        let bank = bank();
        let generator = GridGenerator::new(&bank).unwrap();

        for seed in 0..50 {
            let puzzle = generator.generate(&mut StdRng::seed_from_u64(seed));
            let matching = puzzle
                .words
                .iter()
                .filter(|w| **w == puzzle.secret)
                .count();
            assert_eq!(matching, 1, "seed {seed}");
        }
    }

    #[test]
    fn words_keep_their_spacing() {
        let bank = bank();
        let generator = GridGenerator::new(&bank).unwrap();

        for seed in 0..200 {
            let puzzle = generator.generate(&mut StdRng::seed_from_u64(seed));
            assert!(!puzzle.relaxed);
            assert_eq!(puzzle.spacing_violations(), 0, "seed {seed}");
            assert_eq!(puzzle.overlaps(), 0, "seed {seed}");
        }
    }

    #[test]
    fn filler_has_no_letters_digits_or_brackets_inside_words() {
        let bank = bank();
        let generator = GridGenerator::new(&bank).unwrap();
        let puzzle = generator.generate(&mut StdRng::seed_from_u64(3));
        let letters: HashSet<CellPos> = puzzle.placements().flat_map(WordPlacement::cells).collect();

        for row in 0..ROW_COUNT {
            for pos in 0..CELLS_PER_ROW * COLUMN_COUNT {
                let cell = CellPos::new(row, pos);
                let ch = puzzle.board.get(cell).unwrap();
                if letters.contains(&cell) {
                    assert!(ch.is_ascii_lowercase());
                    assert!(!is_bracket(ch));
                } else {
                    assert!(SYMBOLS.contains(&ch), "unexpected filler {ch:?}");
                }
            }
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let bank = bank();
        let generator = GridGenerator::new(&bank).unwrap();

        let a = generator.generate(&mut StdRng::seed_from_u64(42));
        let b = generator.generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = generator.generate(&mut StdRng::seed_from_u64(43));
        assert_ne!(a.board, c.board);
    }

    #[test]
    fn over_constrained_board_relaxes_spacing() {
        // At most three spaced words fit in a row (starts 0, 5, 10), so 48 row
        // segments hold at most 144 words.
        let bank = synthetic_bank(150);
        let generator = GridGenerator::new(&bank).unwrap().with_word_count(150);

        let puzzle = generator.generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(puzzle.words.len(), 150);
        assert!(puzzle.relaxed);
        assert!(puzzle.spacing_violations() > 0);
    }

    #[test]
    fn small_bank_plants_what_it_has() {
        let bank = synthetic_bank(3);
        let generator = GridGenerator::new(&bank).unwrap();
        assert_eq!(generator.word_count(), 3);

        let puzzle = generator.generate(&mut StdRng::seed_from_u64(9));
        assert_eq!(puzzle.words.len(), 3);
        assert!(puzzle.words.contains(&puzzle.secret));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(
            GridGenerator::new(&[]).unwrap_err(),
            GeneratorError::EmptyBank
        );
    }

    #[test]
    fn word_count_never_zero() {
        let bank = bank();
        let generator = GridGenerator::new(&bank).unwrap().with_word_count(0);
        assert_eq!(generator.word_count(), 1);
    }

    #[test]
    fn candidate_grid_covers_every_start() {
        assert_eq!(
            all_candidates().count(),
            COLUMN_COUNT * ROW_COUNT * (MAX_START + 1)
        );
    }

    #[test]
    fn spaced_candidates_exclude_window() {
        let placed = vec![PlacedWord {
            placement: WordPlacement::new(0, 0, 6),
            word: Word::new("good").unwrap(),
        }];
        let row_starts: Vec<usize> = spaced_candidates(&placed)
            .into_iter()
            .filter(|p| p.column() == 0 && p.row() == 0)
            .map(WordPlacement::start)
            .collect();
        assert_eq!(row_starts, vec![0, 1, 11, 12]);
    }
}
