//! Autoplay placement evaluator
//!
//! Given a board and the falling piece, the evaluator enumerates every legal
//! (rotation, column), simulates the drop on a private copy of the board, scores
//! the result and picks the best target. A separate move selector then walks the
//! live piece toward that target one input per tick.
//!
//! # Module Structure
//!
//! - [`legality`]: the fit predicate everything else composes from
//! - [`simulate`]: drop simulation and hypothetical locking
//! - [`score`]: holes / cleared lines / height features and [`Weights`]
//! - [`search`]: best-placement search
//! - [`mover`]: rotate-then-translate step selection with kick fallback
//! - [`blunder`]: optional injected mistakes
//! - [`autoplay`]: the per-tick driver tying it together
//!
//! # Example
//!
//! ```
//! use ledtris_core::Board;
//! use ledtris_engine::{best_placement, Weights};
//! use ledtris_types::{PieceKind, Rotation};
//!
//! let best = best_placement(&Board::new(), PieceKind::I, &Weights::default()).unwrap();
//! assert_eq!(best.rotation, Rotation::North);
//! assert_eq!(best.y, 9);
//! ```

pub mod autoplay;
pub mod blunder;
pub mod error;
pub mod legality;
pub mod mover;
pub mod score;
pub mod search;
pub mod simulate;

pub use ledtris_core as core;
pub use ledtris_types as types;

pub use autoplay::Autoplayer;
pub use blunder::Blunder;
pub use error::EngineError;
pub use legality::is_legal;
pub use mover::{next_step, rotate_step};
pub use score::{measure, BoardMetrics, Weights, MAX_WEIGHT};
pub use search::{best_placement, candidates, evaluate, max_column, Placement};
pub use simulate::{drop_row, with_locked};
