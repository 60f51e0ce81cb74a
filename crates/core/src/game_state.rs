//! Game state module - owns the live board and the single active piece
//!
//! This is the game-state owner the autoplayer talks to. It spawns pieces, applies
//! one [`Step`] per autoplay tick, runs gravity, locks pieces, clears rows and
//! tracks the game-over / reset lifecycle. It never decides *where* a piece goes.

use log::{debug, info};

use crate::pieces::get_shape;
use crate::types::*;
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> [(i8, i8); 4] {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    pub fn blocks(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if all minos are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        board.fits(&self.shape(), self.x, self.y)
    }

    /// Check if the piece is resting on the floor or a locked cell
    pub fn is_grounded(&self, board: &Board) -> bool {
        !board.fits(&self.shape(), self.x, self.y + 1)
    }

    /// Copy of this piece after the given step (legality not checked)
    pub fn after(&self, step: Step) -> Self {
        match step {
            Step::Idle => *self,
            Step::RotateCw { kick } => Self {
                rotation: self.rotation.rotate_cw(),
                x: self.x + kick,
                ..*self
            },
            Step::MoveLeft | Step::MoveRight => Self {
                x: self.x + step.dx(),
                ..*self
            },
        }
    }
}

/// What happened during a gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer still running, or the game is not playable
    Idle,
    /// The active piece fell one row
    Fell,
    /// The active piece locked and the next one spawned
    Locked { lines: u32 },
    /// The next piece could not spawn
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    piece_queue: crate::PieceQueue,
    /// Monotonic id for spawned pieces; the autoplayer keys its plan on it.
    piece_id: u32,
    started: bool,
    paused: bool,
    game_over: bool,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    /// Lines cleared in the current game
    lines: u32,
    /// Pieces locked in the current game
    pieces: u32,
    /// Finished games since start-up
    games: u32,
    best_lines: u32,
}

impl GameState {
    /// Create a new game with the default gravity interval
    pub fn new(seed: u32) -> Self {
        Self::with_drop_interval(seed, DEFAULT_DROP_MS)
    }

    pub fn with_drop_interval(seed: u32, drop_interval_ms: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            piece_queue: crate::PieceQueue::new(seed),
            piece_id: 0,
            started: false,
            paused: false,
            game_over: false,
            drop_interval_ms: drop_interval_ms.max(1),
            drop_timer_ms: 0,
            lines: 0,
            pieces: 0,
            games: 0,
            best_lines: 0,
        }
    }

    /// Start the game (spawns the first piece)
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the autoplayer and gravity may act
    pub fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn best_lines(&self) -> u32 {
        self.best_lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access (tests and scripted scenarios)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece (tests and scripted scenarios)
    pub fn set_active(&mut self, piece: Option<Piece>) {
        self.active = piece;
    }

    /// Spawn the next piece from the queue
    ///
    /// Returns false and ends the game when the spawn area is blocked.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        let piece = Piece::new(kind);
        self.drop_timer_ms = 0;

        if !piece.is_valid(&self.board) {
            self.active = None;
            self.set_game_over();
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!("spawned {} (piece #{})", kind.as_str(), self.piece_id);
        true
    }

    /// Apply one autoplay step to the active piece
    ///
    /// Returns true when the piece changed; an illegal step leaves it untouched.
    pub fn apply_step(&mut self, step: Step) -> bool {
        if !self.playable() || step == Step::Idle {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let next = active.after(step);
        if !next.is_valid(&self.board) {
            return false;
        }
        self.active = Some(next);
        true
    }

    /// Gravity tick - advance the drop timer by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if !self.playable() {
            return TickOutcome::Idle;
        }
        let Some(active) = self.active else {
            return TickOutcome::Idle;
        };

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms {
            return TickOutcome::Idle;
        }
        self.drop_timer_ms = 0;

        if !active.is_grounded(&self.board) {
            self.active = Some(Piece {
                y: active.y + 1,
                ..active
            });
            return TickOutcome::Fell;
        }

        let lines = self.lock_piece();
        if self.game_over {
            TickOutcome::GameOver
        } else {
            TickOutcome::Locked { lines }
        }
    }

    /// Lock the active piece, clear full rows and spawn the next piece
    ///
    /// Returns the number of rows cleared.
    pub fn lock_piece(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        if !self
            .board
            .lock_piece(&active.shape(), active.x, active.y, active.kind)
        {
            // Can only happen when a caller placed an overlapping piece by hand.
            self.set_game_over();
            return 0;
        }
        self.pieces += 1;

        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.lines += cleared;
            debug!("cleared {} row(s), {} total", cleared, self.lines);
        }

        self.spawn_piece();
        cleared
    }

    /// End the current game
    ///
    /// Called on a blocked spawn, and by the tick driver when the evaluator
    /// finds no legal placement for the freshly spawned piece.
    pub fn set_game_over(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.active = None;
        self.best_lines = self.best_lines.max(self.lines);
        info!(
            "game over: {} lines, {} pieces (best {})",
            self.lines, self.pieces, self.best_lines
        );
    }

    /// Clear the board and start a new game, keeping the piece sequence going
    pub fn reset(&mut self) {
        if !self.game_over {
            self.best_lines = self.best_lines.max(self.lines);
        }
        self.games = self.games.wrapping_add(1);
        self.board.clear();
        self.active = None;
        self.game_over = false;
        self.paused = false;
        self.lines = 0;
        self.pieces = 0;
        self.drop_timer_ms = 0;
        self.started = true;
        info!("reset: starting game #{}", self.games + 1);
        self.spawn_piece();
    }

    /// Apply an external action (reset button, pause)
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
