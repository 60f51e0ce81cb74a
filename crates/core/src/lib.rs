//! Core game logic - pure, deterministic, and testable
//!
//! This crate owns everything the autoplay evaluator reads and the tick driver
//! mutates. It has **no dependencies** on rendering, terminals, or timing sources.
//!
//! # Module Structure
//!
//! - [`board`]: 7x10 LED-matrix playfield with fit checks and line clearing
//! - [`pieces`]: Static piece catalog, 4 normalised offsets per (kind, rotation)
//! - [`game_state`]: Active piece, gravity, locking, game over and reset
//! - [`rng`]: Seeded LCG and 7-bag piece supply
//!
//! # Example
//!
//! ```
//! use ledtris_core::GameState;
//! use ledtris_types::Step;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_step(Step::MoveLeft);
//! game.tick(1000);
//!
//! assert!(game.active().is_some());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use ledtris_types as types;

pub use board::Board;
pub use game_state::{GameState, Piece, TickOutcome};
pub use pieces::{get_shape, max_dx, max_dy, PieceShape};
pub use rng::{PieceQueue, SimpleRng};
