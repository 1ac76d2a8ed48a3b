//! Game session state machine
//!
//! One `GameSession` owns the board and every piece of play state. The
//! presentation layer forwards hover/click/give-up/regenerate events and applies
//! the returned [`Instruction`]s; it never mutates the session directly.

use super::highlight::{CellStyle, HighlightState};
use super::instruction::{IndicatorStatus, Instruction, Notification};
use crate::core::{Board, CELLS_PER_ROW, CellPos, WordPlacement, find_lazy_match};
use crate::generator::{GridGenerator, PlacedWord, Puzzle};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Distinct wrong words counted before the counter saturates
pub const MAX_WRONG_WORDS: u8 = 3;

/// Attempt indicators shown in the status line
pub const INDICATOR_COUNT: usize = MAX_WRONG_WORDS as usize;

/// Session lifecycle; `SecretFound` is terminal until [`GameSession::regenerate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Playing,
    SecretFound,
}

/// A revealed bracket match, in global cell positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchRange {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    /// Cells from `start` to `end`, inclusive
    #[must_use]
    pub fn cells(self) -> Vec<CellPos> {
        (self.start..=self.end)
            .map(|pos| CellPos::new(self.row, pos))
            .collect()
    }
}

/// Interactive puzzle state
pub struct GameSession<'a, R: Rng> {
    generator: GridGenerator<'a>,
    rng: R,
    puzzle: Puzzle,
    phase: SessionPhase,
    removed: FxHashSet<WordPlacement>,
    clicked_words: FxHashSet<WordPlacement>,
    clicked_ranges: FxHashSet<MatchRange>,
    wrong_word_count: u8,
    highlights: HighlightState,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// Start a session on a freshly generated puzzle
    ///
    /// # Examples
    /// ```
    /// use hexhack::generator::GridGenerator;
    /// use hexhack::session::{GameSession, SessionPhase};
    /// use hexhack::wordlists::{WORDS, loader::words_from_slice};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let bank = words_from_slice(WORDS);
    /// let generator = GridGenerator::new(&bank).unwrap();
    /// let mut session = GameSession::new(generator, StdRng::seed_from_u64(1));
    ///
    /// let secret = session.secret().placement;
    /// let first_letter = secret.cells().next().unwrap();
    /// session.click(first_letter);
    /// assert_eq!(session.phase(), SessionPhase::SecretFound);
    /// ```
    pub fn new(generator: GridGenerator<'a>, mut rng: R) -> Self {
        let puzzle = generator.generate(&mut rng);
        Self::with_puzzle(generator, rng, puzzle)
    }

    /// Start a session on an existing puzzle
    ///
    /// `generator` and `rng` are kept for decoy removal and regeneration.
    pub fn with_puzzle(generator: GridGenerator<'a>, rng: R, puzzle: Puzzle) -> Self {
        info!(
            words = puzzle.words.len(),
            relaxed = puzzle.relaxed,
            "new session"
        );
        Self {
            generator,
            rng,
            puzzle,
            phase: SessionPhase::Playing,
            removed: FxHashSet::default(),
            clicked_words: FxHashSet::default(),
            clicked_ranges: FxHashSet::default(),
            wrong_word_count: 0,
            highlights: HighlightState::default(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.puzzle.board
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn secret(&self) -> &PlacedWord {
        &self.puzzle.secret
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn wrong_word_count(&self) -> u8 {
        self.wrong_word_count
    }

    #[must_use]
    pub const fn highlights(&self) -> &HighlightState {
        &self.highlights
    }

    #[must_use]
    pub fn is_removed(&self, placement: WordPlacement) -> bool {
        self.removed.contains(&placement)
    }

    #[must_use]
    pub const fn removed_words(&self) -> &FxHashSet<WordPlacement> {
        &self.removed
    }

    #[must_use]
    pub const fn clicked_words(&self) -> &FxHashSet<WordPlacement> {
        &self.clicked_words
    }

    #[must_use]
    pub const fn clicked_match_ranges(&self) -> &FxHashSet<MatchRange> {
        &self.clicked_ranges
    }

    /// Indicator states, left to right; wrong words fill from the right
    #[must_use]
    pub fn indicators(&self) -> [IndicatorStatus; INDICATOR_COUNT] {
        let mut indicators = [IndicatorStatus::Intact; INDICATOR_COUNT];
        for slot in indicators
            .iter_mut()
            .rev()
            .take(usize::from(self.wrong_word_count))
        {
            *slot = IndicatorStatus::Wrong;
        }
        indicators
    }

    #[must_use]
    pub fn style_at(&self, cell: CellPos) -> CellStyle {
        self.highlights.style_at(cell)
    }

    /// Byte value of the character under `cell`
    #[must_use]
    pub fn memory_value(&self, cell: CellPos) -> Option<u8> {
        self.puzzle
            .board
            .get(cell)
            .and_then(|c| u8::try_from(c).ok())
    }

    /// Pointer entered `cell`
    pub fn hover(&mut self, cell: CellPos) -> Vec<Instruction> {
        if self.phase == SessionPhase::SecretFound || !cell.in_bounds() {
            return Vec::new();
        }

        let span = self
            .match_at(cell)
            .map(MatchRange::cells)
            .filter(|cells| !self.highlights.covers(cells));
        let transient = match span {
            Some(cells) => cells,
            None if self.highlights.is_persistent(cell) => Vec::new(),
            None => vec![cell],
        };

        self.highlights.set_transient(transient.clone());
        if transient.is_empty() {
            vec![Instruction::ClearTransientHighlight]
        } else {
            vec![Instruction::SetTransientHighlight(transient)]
        }
    }

    /// Pointer left the board or the hovered cell
    pub fn unhover(&mut self) -> Vec<Instruction> {
        self.highlights.clear_transient();
        vec![Instruction::ClearTransientHighlight]
    }

    /// Player clicked `cell`
    ///
    /// The word check and the bracket check run independently; only finding the
    /// secret short-circuits.
    pub fn click(&mut self, cell: CellPos) -> Vec<Instruction> {
        if self.phase == SessionPhase::SecretFound || !cell.in_bounds() {
            return Vec::new();
        }

        let mut out = Vec::new();
        if self.check_word(cell, &mut out).is_break() {
            return out;
        }
        self.check_bracket(cell, &mut out);
        out
    }

    /// Reveal the secret and end the round
    pub fn give_up(&mut self) -> Vec<Instruction> {
        if self.phase == SessionPhase::SecretFound {
            return Vec::new();
        }

        self.phase = SessionPhase::SecretFound;
        let cells: Vec<CellPos> = self.puzzle.secret.placement.cells().collect();
        self.highlights.reveal(cells.iter().copied());
        info!(word = %self.puzzle.secret.word, "player gave up");

        vec![
            Instruction::AppendMessage(Notification::SecretFound),
            Instruction::RevealSecret(cells),
        ]
    }

    /// Throw the current board away and start over
    pub fn regenerate(&mut self) -> Vec<Instruction> {
        self.puzzle = self.generator.generate(&mut self.rng);
        self.phase = SessionPhase::Playing;
        self.removed.clear();
        self.clicked_words.clear();
        self.clicked_ranges.clear();
        self.wrong_word_count = 0;
        self.highlights = HighlightState::default();
        info!(relaxed = self.puzzle.relaxed, "board regenerated");

        vec![Instruction::RenderBoard, Instruction::ClearTransientHighlight]
    }

    fn check_word(&mut self, cell: CellPos, out: &mut Vec<Instruction>) -> ControlFlow<()> {
        let Some(hit) = self.active_word_at(cell).cloned() else {
            return ControlFlow::Continue(());
        };

        if hit.placement == self.puzzle.secret.placement {
            self.phase = SessionPhase::SecretFound;
            info!(word = %hit.word, "secret found");
            out.push(Instruction::AppendMessage(Notification::SecretFound));
            return ControlFlow::Break(());
        }

        let cells: Vec<CellPos> = hit.placement.cells().collect();
        self.highlights.persist(cells.iter().copied());
        out.push(Instruction::SetPersistentHighlight(cells));

        if !self.clicked_words.insert(hit.placement) {
            return ControlFlow::Continue(());
        }

        if self.wrong_word_count < MAX_WRONG_WORDS {
            self.wrong_word_count += 1;
            out.push(Instruction::SetStatusIndicator {
                index: usize::from(MAX_WRONG_WORDS - self.wrong_word_count),
                status: IndicatorStatus::Wrong,
            });
        }

        let likeness = hit.word.likeness(&self.puzzle.secret.word);
        debug!(word = %hit.word, likeness, wrong = self.wrong_word_count, "decoy clicked");
        out.push(Instruction::AppendMessage(Notification::FoundWord(likeness)));
        ControlFlow::Continue(())
    }

    fn check_bracket(&mut self, cell: CellPos, out: &mut Vec<Instruction>) {
        let Some(range) = self.match_at(cell) else {
            return;
        };

        let cells = range.cells();
        self.highlights.persist(cells.iter().copied());
        out.push(Instruction::SetPersistentHighlight(cells));

        if !self.clicked_ranges.insert(range) {
            return;
        }

        out.push(Instruction::AppendMessage(Notification::MatchFound));
        if let Some(placement) = self.remove_decoy() {
            debug!(?range, ?placement, "decoy removed");
            out.push(Instruction::RenderBoard);
        } else {
            debug!(?range, "no decoy left to remove");
            out.push(Instruction::AppendMessage(Notification::Error));
        }
    }

    /// Planted word under `cell` that has not been removed
    fn active_word_at(&self, cell: CellPos) -> Option<&PlacedWord> {
        self.puzzle
            .words
            .iter()
            .find(|w| !self.removed.contains(&w.placement) && w.placement.contains(cell))
    }

    /// Lazy match for the bracket at `cell`, within its own column segment
    fn match_at(&self, cell: CellPos) -> Option<MatchRange> {
        let column = cell.column();
        let base = column * CELLS_PER_ROW;
        let segment = self.puzzle.board.segment(column, cell.row);

        find_lazy_match(segment, cell.offset()).map(|span| MatchRange {
            row: cell.row,
            start: base + span.start,
            end: base + span.end,
        })
    }

    /// Blank one random decoy that is still on the board
    fn remove_decoy(&mut self) -> Option<WordPlacement> {
        let secret = self.puzzle.secret.placement;
        let candidates: Vec<WordPlacement> = self
            .puzzle
            .placements()
            .filter(|p| *p != secret && !self.removed.contains(p))
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let placement = candidates[self.rng.random_range(0..candidates.len())];
        self.puzzle.board.blank(placement);
        self.highlights.forget(placement.cells());
        self.removed.insert(placement);
        Some(placement)
    }
}
