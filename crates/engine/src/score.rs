//! Candidate scoring
//!
//! A candidate is scored on a copy of the board with the piece locked in but the
//! full rows not yet removed:
//!
//! ```text
//! score = landing_row
//!       - hole_penalty     * holes
//!       + line_clear_bonus * cleared_lines
//!       - height_penalty   * max_height
//! ```
//!
//! Deeper landings keep the stack flat, so the landing row itself is the base
//! reward. Everything here is a pure function of its inputs.

use crate::core::Board;
use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_HEIGHT_PENALTY, DEFAULT_HOLE_PENALTY,
    DEFAULT_LINE_CLEAR_BONUS,
};

/// Largest weight accepted from configuration
pub const MAX_WEIGHT: i32 = 1000;

/// Policy weights for the placement heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub hole_penalty: i32,
    pub line_clear_bonus: i32,
    pub height_penalty: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            hole_penalty: DEFAULT_HOLE_PENALTY,
            line_clear_bonus: DEFAULT_LINE_CLEAR_BONUS,
            height_penalty: DEFAULT_HEIGHT_PENALTY,
        }
    }
}

impl Weights {
    /// Combine measured features into a single score
    ///
    /// Saturates instead of overflowing, so extreme weights still rank candidates.
    pub fn score(&self, m: &BoardMetrics) -> i32 {
        let holes = self.hole_penalty.saturating_mul(m.holes as i32);
        let lines = self.line_clear_bonus.saturating_mul(m.cleared_lines as i32);
        let height = self.height_penalty.saturating_mul(m.max_height as i32);
        (m.landing_row as i32)
            .saturating_sub(holes)
            .saturating_add(lines)
            .saturating_sub(height)
    }
}

/// Features of a board with a candidate locked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardMetrics {
    /// Anchor row where the candidate locked
    pub landing_row: i8,
    /// Empty cells with a filled cell somewhere above them in the same column
    pub holes: u32,
    /// Rows with every column filled
    pub cleared_lines: u32,
    /// Tallest column, counted in rows from the floor
    pub max_height: u32,
}

/// Measure `board` (candidate already locked at `landing_row`).
pub fn measure(board: &Board, landing_row: i8) -> BoardMetrics {
    BoardMetrics {
        landing_row,
        holes: count_holes(board),
        cleared_lines: board.full_row_count(),
        max_height: max_height(board),
    }
}

/// Count covered empty cells, scanning each column top to bottom.
pub fn count_holes(board: &Board) -> u32 {
    let mut holes = 0;
    for x in 0..BOARD_WIDTH as i8 {
        let mut block_seen = false;
        for y in 0..BOARD_HEIGHT as i8 {
            if board.is_occupied(x, y) {
                block_seen = true;
            } else if block_seen {
                holes += 1;
            }
        }
    }
    holes
}

/// Height of one column: rows from its topmost filled cell down to the floor.
pub fn column_height(board: &Board, x: i8) -> u32 {
    board
        .column_top(x)
        .map(|top| (BOARD_HEIGHT as i8 - top) as u32)
        .unwrap_or(0)
}

pub fn max_height(board: &Board) -> u32 {
    (0..BOARD_WIDTH as i8)
        .map(|x| column_height(board, x))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_features() {
        let m = measure(&Board::new(), 9);
        assert_eq!(m.holes, 0);
        assert_eq!(m.cleared_lines, 0);
        assert_eq!(m.max_height, 0);
    }

    #[test]
    fn holes_only_count_below_a_block() {
        let board = Board::from_rows(&["X.X....", ".......", "X.....X"]);
        // Column 0: one gap under row 7. Column 2: two gaps under row 7.
        assert_eq!(count_holes(&board), 3);
        assert_eq!(max_height(&board), 3);
        assert_eq!(column_height(&board, 6), 1);
        assert_eq!(column_height(&board, 1), 0);
    }

    #[test]
    fn full_rows_are_counted_before_compaction() {
        let board = Board::from_rows(&["XXXXXXX", "X.XXXXX", "XXXXXXX"]);
        let m = measure(&board, 7);
        assert_eq!(m.cleared_lines, 2);
        assert_eq!(m.holes, 1);
    }

    #[test]
    fn a_hole_always_costs_score() {
        let w = Weights::default();
        let flat = BoardMetrics {
            landing_row: 8,
            holes: 0,
            cleared_lines: 0,
            max_height: 2,
        };
        let holed = BoardMetrics { holes: 1, ..flat };
        assert!(w.score(&holed) < w.score(&flat));
    }

    #[test]
    fn weights_apply_linearly() {
        let w = Weights {
            hole_penalty: 3,
            line_clear_bonus: 5,
            height_penalty: 7,
        };
        let m = BoardMetrics {
            landing_row: 6,
            holes: 2,
            cleared_lines: 1,
            max_height: 4,
        };
        assert_eq!(w.score(&m), 6 - 6 + 5 - 28);
    }

    #[test]
    fn huge_weights_saturate() {
        let w = Weights {
            hole_penalty: i32::MAX,
            line_clear_bonus: 10,
            height_penalty: 2_000_000_000,
        };
        let m = BoardMetrics {
            landing_row: 8,
            holes: 3,
            cleared_lines: 0,
            max_height: 2,
        };
        assert_eq!(w.score(&m), i32::MIN);

        // A clean board still outranks one with holes.
        let clean = BoardMetrics { holes: 0, ..m };
        assert!(w.score(&clean) > w.score(&m));
    }
}
