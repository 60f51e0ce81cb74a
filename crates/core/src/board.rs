//! Board module - manages the LED-matrix playfield
//!
//! The board is a 7x10 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array so the whole board is `Copy`: the evaluator simulates on a
//! stack copy and never touches the live board.
//! Coordinates: (x, y) where x ranges 0..6 (left to right), y ranges 0..9 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows cleared at once (boards built by hand can have many full rows)
pub const MAX_CLEARED_ROWS: usize = BOARD_HEIGHT as usize;

/// The game board - 7 columns x 10 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether every mino of `shape` anchored at (x, y) lands on an empty in-bounds cell
    pub fn fits(&self, shape: &[(i8, i8)], x: i8, y: i8) -> bool {
        shape.iter().all(|&(dx, dy)| self.is_valid(x + dx, y + dy))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Number of completely filled rows (without clearing them)
    pub fn full_row_count(&self) -> u32 {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .count() as u32
    }

    /// Row of the topmost filled cell in column `x`, if any
    pub fn column_top(&self, x: i8) -> Option<i8> {
        (0..BOARD_HEIGHT as i8).find(|&y| self.is_occupied(x, y))
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Lock a piece onto the board at given position with given shape
    /// Returns true if successful, false if any cell is out of bounds or occupied
    pub fn lock_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        if !self.fits(shape, x, y) {
            return false;
        }

        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }

        true
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Build a board from text rows, `.` is empty and any other character is filled.
    ///
    /// Missing rows at the top are treated as empty, so short pictures describe the
    /// bottom of the board. Intended for tests and benches.
    ///
    /// ```
    /// use ledtris_core::Board;
    ///
    /// let board = Board::from_rows(&["XX.....", "XXXXXX."]);
    /// assert!(board.is_occupied(0, 8));
    /// assert!(!board.is_occupied(6, 9));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = BOARD_HEIGHT as usize - rows.len().min(BOARD_HEIGHT as usize);
        for (i, row) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch != '.' {
                    board.set(x as i8, (offset + i) as i8, Some(PieceKind::I));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(6, 0), Some(6));
        assert_eq!(Board::index(0, 1), Some(7));
        assert_eq!(Board::index(6, 9), Some(69));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(7, 0), None);
        assert_eq!(Board::index(0, 10), None);
    }

    #[test]
    fn test_from_rows_pads_from_the_top() {
        let board = Board::from_rows(&["X......", "......X"]);
        assert!(board.is_occupied(0, 8));
        assert!(board.is_occupied(6, 9));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_column_top() {
        let board = Board::from_rows(&["..X....", "X.X...."]);
        assert_eq!(board.column_top(0), Some(9));
        assert_eq!(board.column_top(1), None);
        assert_eq!(board.column_top(2), Some(8));
    }

    #[test]
    fn test_clear_full_rows_compacts() {
        let mut board = Board::from_rows(&["X......", "XXXXXXX", ".X.....", "XXXXXXX"]);
        assert_eq!(board.full_row_count(), 2);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[9, 7]);
        assert!(board.is_occupied(1, 9));
        assert!(board.is_occupied(0, 8));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_more_than_four_full_rows() {
        let mut board = Board::from_rows(&[
            "..X....", "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX", "XXXXXXX",
        ]);
        assert_eq!(board.full_row_count(), 6);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[9, 8, 7, 6, 5, 4]);
        assert_eq!(board.full_row_count(), 0);
        assert_eq!(board.filled_count(), 1);
        assert!(board.is_occupied(2, 9));
    }
}
