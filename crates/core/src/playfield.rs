//! Playfield module - the grid of locked cells
//!
//! The playfield is a 12x18 grid where each cell is empty or holds the kind of
//! the piece that locked there. Storage is a flat row-major array, so the
//! field is `Copy`-cheap to snapshot and never allocates.
//!
//! Coordinates are `(row, col)`: row 0 is the top row, col 0 the left column.
//! Rows above the field (negative) are legal for a falling piece but are never
//! stored.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// Pre-clear indices of the rows removed by one [`Playfield::clear_full_rows`]
/// call, bottom row first.
pub type ClearedRows = ArrayVec<u8, HEIGHT>;

/// The locked-cell grid
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    /// Row-major cells (`row * WIDTH + col`)
    cells: [Cell; FIELD_SIZE],
}

impl Playfield {
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite one cell. Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True when a locked block sits at `(row, col)`.
    ///
    /// Out-of-bounds coordinates report false; wall and floor checks belong to
    /// the caller.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// One row of cells, or `None` past the bottom.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= HEIGHT {
            return None;
        }
        let start = row * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Write `kind` into every absolute `(row, col)` in `cells`.
    ///
    /// Cells above the field or outside it are skipped, so a piece that locks
    /// while partly above row 0 only leaves its visible part behind.
    /// Returns how many cells were written.
    pub fn place(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> usize {
        cells
            .iter()
            .filter(|&&(row, col)| self.set(row, col, Some(kind)))
            .count()
    }

    /// Remove every full row and return how many were removed.
    pub fn clear_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Remove every full row, returning their pre-clear indices.
    ///
    /// Rows are scanned bottom to top. A full row is collapsed (everything above
    /// shifts down one, the top row empties) and the same index is scanned again,
    /// since it now holds the row that used to sit above it.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut row = HEIGHT;

        while row > 0 {
            let y = row - 1;
            if self.is_row_full(y) {
                // Rows already collapsed below this one pulled everything above
                // down, so the original index is offset by that count.
                cleared.push((y - cleared.len()) as u8);
                self.collapse_row(y);
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Drop every row above `y` by one and empty the top row.
    fn collapse_row(&mut self, y: usize) {
        for row in (1..=y).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(None);
    }

    /// Write the grid as cell ids (0 empty, 1..=7 piece kind).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * WIDTH;
            for (col, out_cell) in out_row.iter_mut().enumerate() {
                *out_cell = self.cells[start + col].map_or(0, PieceKind::cell_id);
            }
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole field
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
