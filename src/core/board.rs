//! Two-column character grid and the coordinates used to address it
//!
//! The board is laid out like a memory dump: two column segments of 24 rows,
//! each row 16 cells wide. Cells are addressed with a [`CellPos`] whose `pos`
//! runs across both segments (`0..16` is column 0, `16..32` is column 1).

use super::Word;
use std::fmt;

/// Cells in one row of one column segment
pub const CELLS_PER_ROW: usize = 16;
/// Rows in each column segment
pub const ROW_COUNT: usize = 24;
/// Column segments on the board
pub const COLUMN_COUNT: usize = 2;
/// Letters in every planted word
pub const WORD_LEN: usize = 4;
/// Largest start offset that still fits a word inside one row
pub const MAX_START: usize = CELLS_PER_ROW - WORD_LEN;
/// Address printed next to the first row of column 0
pub const BASE_ADDRESS: usize = 0xF00;

/// Cell coordinate as seen by the presentation layer
///
/// `pos` is global across both column segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub row: usize,
    pub pos: usize,
}

impl CellPos {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, pos: usize) -> Self {
        Self { row, pos }
    }

    /// Build a coordinate from a column segment and an offset inside it
    #[inline]
    #[must_use]
    pub const fn in_column(column: usize, row: usize, offset: usize) -> Self {
        Self {
            row,
            pos: column * CELLS_PER_ROW + offset,
        }
    }

    /// Column segment this cell belongs to
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.pos / CELLS_PER_ROW
    }

    /// Offset of this cell inside its column segment
    #[inline]
    #[must_use]
    pub const fn offset(self) -> usize {
        self.pos % CELLS_PER_ROW
    }

    /// Whether the coordinate addresses a cell on the board
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < ROW_COUNT && self.pos < CELLS_PER_ROW * COLUMN_COUNT
    }
}

/// Where a planted word's letters sit on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordPlacement {
    column: usize,
    row: usize,
    start: usize,
}

impl WordPlacement {
    #[inline]
    #[must_use]
    pub const fn new(column: usize, row: usize, start: usize) -> Self {
        Self { column, row, start }
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Offset of the first letter inside the column segment
    #[inline]
    #[must_use]
    pub const fn start(self) -> usize {
        self.start
    }

    /// Global position of the first letter
    #[inline]
    #[must_use]
    pub const fn global_start(self) -> usize {
        self.column * CELLS_PER_ROW + self.start
    }

    /// Whether `cell` is one of this placement's letters
    #[must_use]
    pub const fn contains(self, cell: CellPos) -> bool {
        cell.row == self.row
            && cell.column() == self.column
            && cell.offset() >= self.start
            && cell.offset() < self.start + WORD_LEN
    }

    /// Whether two placements share a row segment and start within `margin` cells of each other
    #[must_use]
    pub const fn crowds(self, other: Self, margin: usize) -> bool {
        self.column == other.column
            && self.row == other.row
            && self.start.abs_diff(other.start) <= margin
    }

    /// The cells covered by this placement, left to right
    pub fn cells(self) -> impl Iterator<Item = CellPos> {
        (0..WORD_LEN).map(move |i| CellPos::in_column(self.column, self.row, self.start + i))
    }
}

/// The character grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[[char; CELLS_PER_ROW]; ROW_COUNT]; COLUMN_COUNT],
}

impl Board {
    /// Board with every cell set to `ch`
    #[must_use]
    pub const fn filled(ch: char) -> Self {
        Self {
            cells: [[[ch; CELLS_PER_ROW]; ROW_COUNT]; COLUMN_COUNT],
        }
    }

    /// Build a board cell by cell
    ///
    /// `fill` is called with `(column, row, offset)` for column 0 row by row,
    /// then column 1, so a random filler consumes its stream in a fixed order.
    pub fn from_fn(mut fill: impl FnMut(usize, usize, usize) -> char) -> Self {
        let mut board = Self::filled(' ');
        for (column, rows) in board.cells.iter_mut().enumerate() {
            for (row, cells) in rows.iter_mut().enumerate() {
                for (offset, cell) in cells.iter_mut().enumerate() {
                    *cell = fill(column, row, offset);
                }
            }
        }
        board
    }

    /// One row of one column segment
    ///
    /// # Panics
    /// Panics if `column` or `row` is out of range
    #[must_use]
    pub fn segment(&self, column: usize, row: usize) -> &[char] {
        &self.cells[column][row]
    }

    /// Character at `cell`, or `None` when the coordinate is off the board
    #[must_use]
    pub fn get(&self, cell: CellPos) -> Option<char> {
        cell.in_bounds()
            .then(|| self.cells[cell.column()][cell.row][cell.offset()])
    }

    /// Overwrite one cell; out-of-range coordinates are ignored
    pub fn set(&mut self, cell: CellPos, ch: char) {
        if cell.in_bounds() {
            self.cells[cell.column()][cell.row][cell.offset()] = ch;
        }
    }

    /// Write a word's letters over the cells of `placement`
    pub fn write_word(&mut self, placement: WordPlacement, word: &Word) {
        for (cell, letter) in placement.cells().zip(word.letters()) {
            self.set(cell, letter);
        }
    }

    /// Replace a placement's letters with spaces
    pub fn blank(&mut self, placement: WordPlacement) {
        for cell in placement.cells() {
            self.set(cell, ' ');
        }
    }

    /// Text currently held by the cells of `placement`
    #[must_use]
    pub fn text_at(&self, placement: WordPlacement) -> String {
        placement.cells().filter_map(|cell| self.get(cell)).collect()
    }

    /// Address label value for a row of a column segment
    ///
    /// Column 1 continues where column 0 ends.
    #[must_use]
    pub const fn address(column: usize, row: usize) -> usize {
        BASE_ADDRESS + (column * ROW_COUNT + row) * CELLS_PER_ROW
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROW_COUNT {
            for column in 0..COLUMN_COUNT {
                if column > 0 {
                    write!(f, "  ")?;
                }
                let text: String = self.segment(column, row).iter().collect();
                write!(f, "{text}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_pos_splits_global_position() {
        let cell = CellPos::new(3, 21);
        assert_eq!(cell.column(), 1);
        assert_eq!(cell.offset(), 5);
        assert_eq!(CellPos::in_column(1, 3, 5), cell);
    }

    #[test]
    fn cell_pos_bounds() {
        assert!(CellPos::new(0, 0).in_bounds());
        assert!(CellPos::new(23, 31).in_bounds());
        assert!(!CellPos::new(24, 0).in_bounds());
        assert!(!CellPos::new(0, 32).in_bounds());
    }

    #[test]
    fn placement_contains_only_its_letters() {
        let placement = WordPlacement::new(1, 4, 10);
        assert!(placement.contains(CellPos::in_column(1, 4, 10)));
        assert!(placement.contains(CellPos::in_column(1, 4, 13)));
        assert!(!placement.contains(CellPos::in_column(1, 4, 9)));
        assert!(!placement.contains(CellPos::in_column(1, 4, 14)));
        assert!(!placement.contains(CellPos::in_column(0, 4, 10)));
        assert!(!placement.contains(CellPos::in_column(1, 5, 10)));
    }

    #[test]
    fn placement_cells_are_contiguous() {
        let cells: Vec<CellPos> = WordPlacement::new(1, 2, 3).cells().collect();
        assert_eq!(
            cells,
            vec![
                CellPos::new(2, 19),
                CellPos::new(2, 20),
                CellPos::new(2, 21),
                CellPos::new(2, 22),
            ]
        );
    }

    #[test]
    fn crowding_uses_start_distance() {
        let a = WordPlacement::new(0, 0, 0);
        assert!(a.crowds(WordPlacement::new(0, 0, 4), 4));
        assert!(!a.crowds(WordPlacement::new(0, 0, 5), 4));
        assert!(!a.crowds(WordPlacement::new(1, 0, 0), 4));
        assert!(!a.crowds(WordPlacement::new(0, 1, 0), 4));
    }

    #[test]
    fn write_and_blank_word() {
        let mut board = Board::filled('.');
        let placement = WordPlacement::new(0, 7, 2);
        board.write_word(placement, &Word::new("hand").unwrap());
        assert_eq!(board.text_at(placement), "hand");
        assert_eq!(board.segment(0, 7)[..7].iter().collect::<String>(), "..hand.");

        board.blank(placement);
        assert_eq!(board.text_at(placement), "    ");
    }

    #[test]
    fn get_out_of_range_is_none() {
        let board = Board::filled('#');
        assert_eq!(board.get(CellPos::new(0, 0)), Some('#'));
        assert_eq!(board.get(CellPos::new(0, 40)), None);
        assert_eq!(board.get(CellPos::new(30, 0)), None);
    }

    #[test]
    fn from_fn_visits_column_zero_first() {
        let mut order = Vec::new();
        let _ = Board::from_fn(|column, row, offset| {
            order.push((column, row, offset));
            '.'
        });
        assert_eq!(order.len(), COLUMN_COUNT * ROW_COUNT * CELLS_PER_ROW);
        assert_eq!(order[0], (0, 0, 0));
        assert_eq!(order[CELLS_PER_ROW], (0, 1, 0));
        assert_eq!(order[ROW_COUNT * CELLS_PER_ROW], (1, 0, 0));
    }

    #[test]
    fn addresses_continue_across_columns() {
        assert_eq!(Board::address(0, 0), 0xF00);
        assert_eq!(Board::address(0, 1), 0xF10);
        assert_eq!(Board::address(1, 0), 0x1080);
    }
}
