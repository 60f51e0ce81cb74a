//! MatrixView: maps `core::GameState` into the LED pixel buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{PixelBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Renders the playfield onto the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixView {
    /// Dim the frozen board while a finished game waits for its reset.
    pub dim_on_game_over: bool,
}

impl Default for MatrixView {
    fn default() -> Self {
        Self {
            dim_on_game_over: true,
        }
    }
}

impl MatrixView {
    /// Render locked cells plus the active piece into `pb`.
    pub fn render_into(&self, game: &GameState, pb: &mut PixelBuffer) {
        pb.clear();

        let board = game.board();
        let dim = self.dim_on_game_over && game.game_over();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if let Some(Some(kind)) = board.get(x, y) {
                    let c = piece_color(kind);
                    pb.set(x, y, if dim { c.dimmed() } else { c });
                }
            }
        }

        if let Some(active) = game.active() {
            let c = piece_color(active.kind);
            for (x, y) in active.blocks() {
                pb.set(x, y, c);
            }
        }
    }

    pub fn render(&self, game: &GameState) -> PixelBuffer {
        let mut pb = PixelBuffer::new();
        self.render_into(game, &mut pb);
        pb
    }
}

/// LED colour for each piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 200, 220),
        PieceKind::O => Rgb::new(230, 200, 0),
        PieceKind::T => Rgb::new(170, 0, 200),
        PieceKind::S => Rgb::new(0, 200, 60),
        PieceKind::Z => Rgb::new(220, 20, 20),
        PieceKind::J => Rgb::new(20, 60, 230),
        PieceKind::L => Rgb::new(240, 120, 0),
    }
}
