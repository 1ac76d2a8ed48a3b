//! Mapping between terminal coordinates and board cells

use crate::core::{CELLS_PER_ROW, CellPos, ROW_COUNT};

/// Characters taken by an address label and its trailing space
pub const ADDRESS_WIDTH: u16 = 7;
/// Gap between the two column segments
pub const SPACER_WIDTH: u16 = 4;
/// Width of one board line
pub const BOARD_WIDTH: u16 = 2 * (ADDRESS_WIDTH + CELLS_PER_ROW as u16) + SPACER_WIDTH;

/// Where the board's first line was drawn on screen
///
/// Recorded on every frame so mouse events can be resolved against the
/// latest layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
}

impl BoardGeometry {
    #[must_use]
    pub const fn new(origin_x: u16, origin_y: u16) -> Self {
        Self { origin_x, origin_y }
    }

    /// Cell under the terminal position `(x, y)`, if any
    #[must_use]
    pub fn cell_at(self, x: u16, y: u16) -> Option<CellPos> {
        let row = usize::from(y.checked_sub(self.origin_y)?);
        if row >= ROW_COUNT {
            return None;
        }

        let x = x.checked_sub(self.origin_x)?;
        let segment = ADDRESS_WIDTH + CELLS_PER_ROW as u16 + SPACER_WIDTH;
        let (column, rel) = if x < segment {
            (0, x)
        } else {
            (1, x - segment)
        };
        let offset = usize::from(rel.checked_sub(ADDRESS_WIDTH)?);
        (offset < CELLS_PER_ROW).then(|| CellPos::in_column(column, row, offset))
    }

    /// Terminal position of `cell`
    #[must_use]
    pub fn screen_pos(self, cell: CellPos) -> (u16, u16) {
        let segment = ADDRESS_WIDTH + CELLS_PER_ROW as u16 + SPACER_WIDTH;
        // Board coordinates are tiny, the casts cannot truncate
        let x = self.origin_x
            + segment * cell.column() as u16
            + ADDRESS_WIDTH
            + cell.offset() as u16;
        (x, self.origin_y + cell.row as u16)
    }
}
