//! Drop simulation on a read-only board.

use crate::core::{get_shape, Board};
use crate::legality::is_legal;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT};

/// Row at which a piece dropped straight down from `start_y` comes to rest.
///
/// Returns `None` when the start position itself is illegal; for a spawn-row
/// probe that means the board is full. Takes at most `BOARD_HEIGHT` steps.
pub fn drop_row(
    board: &Board,
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    start_y: i8,
) -> Option<i8> {
    if !is_legal(board, kind, rotation, x, start_y) {
        return None;
    }

    let mut y = start_y;
    for _ in 0..BOARD_HEIGHT {
        if !is_legal(board, kind, rotation, x, y + 1) {
            break;
        }
        y += 1;
    }
    Some(y)
}

/// Copy of `board` with the piece locked at (x, y). Rows are not compacted.
///
/// Returns `None` if the piece does not fit there.
pub fn with_locked(
    board: &Board,
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
) -> Option<Board> {
    let mut sim = *board;
    sim.lock_piece(&get_shape(kind, rotation), x, y, kind)
        .then_some(sim)
}
