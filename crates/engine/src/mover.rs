//! Incremental move selection: one discrete input per tick toward a target.
//!
//! Rotation comes first and only ever goes clockwise, so a target three
//! rotations away takes three ticks. A blocked rotation is retried shifted one
//! column left, then one column right. Once the rotation matches, the piece
//! walks one column per tick toward the target column.

use crate::core::{Board, Piece};
use crate::legality::is_legal;
use crate::search::Placement;
use crate::types::Step;

/// Kick offsets tried, in order, when rotating
const ROTATION_KICKS: [i8; 3] = [0, -1, 1];

/// Pick the single step to apply to `piece` this tick.
///
/// Never fails: when nothing useful is legal the answer is [`Step::Idle`].
pub fn next_step(board: &Board, piece: &Piece, target: &Placement) -> Step {
    if piece.rotation != target.rotation {
        return rotate_step(board, piece);
    }

    let step = match target.x.cmp(&piece.x) {
        std::cmp::Ordering::Less => Step::MoveLeft,
        std::cmp::Ordering::Greater => Step::MoveRight,
        std::cmp::Ordering::Equal => return Step::Idle,
    };

    if is_legal(board, piece.kind, piece.rotation, piece.x + step.dx(), piece.y) {
        step
    } else {
        Step::Idle
    }
}

/// One clockwise rotation, with a one-column kick either way as fallback
pub fn rotate_step(board: &Board, piece: &Piece) -> Step {
    let rotation = piece.rotation.rotate_cw();
    ROTATION_KICKS
        .iter()
        .find(|&&kick| is_legal(board, piece.kind, rotation, piece.x + kick, piece.y))
        .map(|&kick| Step::RotateCw { kick })
        .unwrap_or(Step::Idle)
}
