//! Persistent and transient cell highlighting

use crate::core::CellPos;
use rustc_hash::FxHashSet;

/// How a cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Base,
    /// Under the pointer (transient)
    Hover,
    /// Clicked word or bracket match (persistent)
    Matched,
    /// Secret letters shown after giving up
    Revealed,
}

/// Highlight bookkeeping for one board
///
/// The transient set is replaced wholesale on every hover and never feeds back
/// into the persistent set.
#[derive(Debug, Clone, Default)]
pub struct HighlightState {
    persistent: FxHashSet<CellPos>,
    transient: Vec<CellPos>,
    revealed: FxHashSet<CellPos>,
}

impl HighlightState {
    pub fn persist(&mut self, cells: impl IntoIterator<Item = CellPos>) {
        self.persistent.extend(cells);
    }

    /// Drop persistent highlight from `cells`
    pub fn forget(&mut self, cells: impl IntoIterator<Item = CellPos>) {
        for cell in cells {
            self.persistent.remove(&cell);
        }
    }

    #[must_use]
    pub fn is_persistent(&self, cell: CellPos) -> bool {
        self.persistent.contains(&cell)
    }

    /// Whether every cell in `cells` is already persistently highlighted
    #[must_use]
    pub fn covers(&self, cells: &[CellPos]) -> bool {
        cells.iter().all(|cell| self.persistent.contains(cell))
    }

    pub fn set_transient(&mut self, cells: Vec<CellPos>) {
        self.transient = cells;
    }

    pub fn clear_transient(&mut self) {
        self.transient.clear();
    }

    #[must_use]
    pub fn transient(&self) -> &[CellPos] {
        &self.transient
    }

    #[must_use]
    pub fn is_transient(&self, cell: CellPos) -> bool {
        self.transient.contains(&cell)
    }

    pub fn reveal(&mut self, cells: impl IntoIterator<Item = CellPos>) {
        self.revealed.extend(cells);
    }

    /// Style for `cell`; revealed beats hover, hover beats matched
    #[must_use]
    pub fn style_at(&self, cell: CellPos) -> CellStyle {
        if self.revealed.contains(&cell) {
            CellStyle::Revealed
        } else if self.is_transient(cell) {
            CellStyle::Hover
        } else if self.is_persistent(cell) {
            CellStyle::Matched
        } else {
            CellStyle::Base
        }
    }
}
