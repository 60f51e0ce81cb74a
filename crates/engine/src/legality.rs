//! Legality check: the single predicate every other evaluator operation uses.

use crate::core::{get_shape, Board};
use crate::types::{PieceKind, Rotation};

/// True when all four minos of `kind` at `rotation`, anchored at (x, y), are
/// inside the board and on empty cells.
///
/// Works the same against the live board and a simulation copy.
pub fn is_legal(board: &Board, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
    board.fits(&get_shape(kind, rotation), x, y)
}
