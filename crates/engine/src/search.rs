//! Best-placement search
//!
//! Greedy single-ply search: every rotation, every column the rotation fits in
//! horizontally, dropped from the spawn row and scored on a private board copy.
//! Iteration order is rotation ascending, then column ascending; the first
//! strictly-best candidate wins ties.

use arrayvec::ArrayVec;
use log::debug;

use crate::core::{max_dx, Board};
use crate::error::EngineError;
use crate::legality::is_legal;
use crate::score::{measure, BoardMetrics, Weights};
use crate::simulate::{drop_row, with_locked};
use crate::types::{PieceKind, Rotation, BOARD_WIDTH, SPAWN_POSITION};

/// Upper bound on candidates: 4 rotations x 7 columns
pub const MAX_CANDIDATES: usize = 4 * BOARD_WIDTH as usize;

/// A scored (rotation, column, landing row) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub metrics: BoardMetrics,
    pub score: i32,
}

/// Rightmost anchor column for this rotation
pub fn max_column(kind: PieceKind, rotation: Rotation) -> i8 {
    BOARD_WIDTH as i8 - 1 - max_dx(kind, rotation)
}

/// Drop and score a single candidate.
///
/// Returns `None` if the candidate is illegal at the spawn row.
pub fn evaluate(
    board: &Board,
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    weights: &Weights,
) -> Option<Placement> {
    let spawn_y = SPAWN_POSITION.1;
    if !is_legal(board, kind, rotation, x, spawn_y) {
        return None;
    }
    let y = drop_row(board, kind, rotation, x, spawn_y)?;
    let sim = with_locked(board, kind, rotation, x, y)?;
    let metrics = measure(&sim, y);

    Some(Placement {
        kind,
        rotation,
        x,
        y,
        metrics,
        score: weights.score(&metrics),
    })
}

/// Every legal candidate, in search order.
pub fn candidates(
    board: &Board,
    kind: PieceKind,
    weights: &Weights,
) -> ArrayVec<Placement, MAX_CANDIDATES> {
    let mut out = ArrayVec::new();
    for rotation in Rotation::ALL {
        for x in 0..=max_column(kind, rotation) {
            if let Some(p) = evaluate(board, kind, rotation, x, weights) {
                out.push(p);
            }
        }
    }
    out
}

/// Highest-scoring placement for `kind` on `board`.
///
/// # Errors
///
/// [`EngineError::NoLegalPlacement`] when nothing is legal at the spawn row;
/// the caller must treat this as game over.
pub fn best_placement(
    board: &Board,
    kind: PieceKind,
    weights: &Weights,
) -> Result<Placement, EngineError> {
    let mut best: Option<Placement> = None;
    for candidate in candidates(board, kind, weights) {
        match best {
            Some(b) if candidate.score <= b.score => {}
            _ => best = Some(candidate),
        }
    }

    let best = best.ok_or(EngineError::NoLegalPlacement { kind })?;
    debug!(
        "best {}: rot {} col {} row {} score {} (holes {}, lines {}, height {})",
        kind.as_str(),
        best.rotation.index(),
        best.x,
        best.y,
        best.score,
        best.metrics.holes,
        best.metrics.cleared_lines,
        best.metrics.max_height
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn o_piece_prefers_leftmost_on_empty_board() {
        let best = best_placement(&Board::new(), PieceKind::O, &Weights::default()).unwrap();
        assert_eq!((best.rotation, best.x, best.y), (Rotation::North, 0, 8));
    }

    #[test]
    fn candidate_count_matches_column_bounds() {
        let cands = candidates(&Board::new(), PieceKind::I, &Weights::default());
        // Horizontal: columns 0..=3 twice; vertical: columns 0..=6 twice.
        assert_eq!(cands.len(), 4 + 7 + 4 + 7);
    }

    #[test]
    fn full_spawn_row_is_no_legal_placement() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, 0, Some(PieceKind::Z));
        }
        let err = best_placement(&board, PieceKind::T, &Weights::default()).unwrap_err();
        assert_eq!(err, EngineError::NoLegalPlacement { kind: PieceKind::T });
        assert!(err.is_game_over());
    }
}
