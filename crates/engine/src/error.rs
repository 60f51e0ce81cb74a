use thiserror::Error;

use crate::types::PieceKind;

/// Failures the evaluator surfaces to the game-state owner.
///
/// An illegal candidate is not an error: legality checks return `bool` and
/// every search simply skips illegal candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No (rotation, column) is legal at the spawn row: the board is full.
    #[error("no legal placement for piece {}", .kind.as_str())]
    NoLegalPlacement { kind: PieceKind },
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::NoLegalPlacement { .. } => "no_legal_placement",
        }
    }

    /// Whether the game must end because of this error
    pub fn is_game_over(self) -> bool {
        matches!(self, EngineError::NoLegalPlacement { .. })
    }
}
