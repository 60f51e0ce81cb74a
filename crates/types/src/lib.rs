//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, evaluator, LED rendering).
//!
//! # Board Dimensions
//!
//! The playfield is the LED matrix itself:
//!
//! - **Width**: 7 columns (indexed 0-6)
//! - **Height**: 10 rows (indexed 0-9, row 0 at the top)
//! - **Spawn position**: (2, 0), top-left anchor of the piece's bounding box
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MOVE_MS` | 120 | Interval between autoplay input steps |
//! | `DEFAULT_DROP_MS` | 400 | Gravity interval (one row per drop) |
//! | `DEFAULT_RESET_DELAY_MS` | 1500 | Pause on the final board before resetting |
//!
//! # Examples
//!
//! ```
//! use ledtris_types::{PieceKind, Rotation, Step, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::from_index(3).rotate_cw(), Rotation::North);
//! assert_eq!(Step::MoveLeft.dx(), -1);
//!
//! assert_eq!(BOARD_WIDTH, 7);
//! assert_eq!(BOARD_HEIGHT, 10);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: u8 = 7;

/// Board height in cells (10 rows)
pub const BOARD_HEIGHT: u8 = 10;

/// Spawn anchor (x, y) for new pieces
pub const SPAWN_POSITION: (i8, i8) = (2, 0);

/// Interval between autoplay input steps
pub const DEFAULT_MOVE_MS: u32 = 120;

/// Gravity interval: the active piece falls one row per drop
pub const DEFAULT_DROP_MS: u32 = 400;

/// How long the full board stays visible before the automatic reset
pub const DEFAULT_RESET_DELAY_MS: u32 = 1500;

/// Penalty per covered empty cell
pub const DEFAULT_HOLE_PENALTY: i32 = 8;

/// Reward per completed row
pub const DEFAULT_LINE_CLEAR_BONUS: i32 = 10;

/// Penalty per row of stack height (tallest column)
pub const DEFAULT_HEIGHT_PENALTY: i32 = 2;

/// The seven tetromino piece kinds
///
/// The kind doubles as the LED colour of locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use ledtris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states, indexed 0-3
///
/// The cycle only ever advances clockwise: North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations in index order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use ledtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation index (0 = North, 3 = West)
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from an index, wrapping modulo 4
    pub fn from_index(i: u8) -> Self {
        Self::ALL[(i % 4) as usize]
    }
}

/// One discrete input applied to the active piece per autoplay tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Leave the piece alone this tick
    Idle,
    /// Rotate clockwise, shifting the anchor by `kick` columns (-1, 0 or 1)
    RotateCw { kick: i8 },
    /// Move one column left
    MoveLeft,
    /// Move one column right
    MoveRight,
}

impl Step {
    /// Horizontal displacement of the anchor caused by this step
    pub fn dx(&self) -> i8 {
        match self {
            Step::Idle => 0,
            Step::RotateCw { kick } => *kick,
            Step::MoveLeft => -1,
            Step::MoveRight => 1,
        }
    }

    /// Convert to camelCase string (used in log lines)
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Idle => "idle",
            Step::RotateCw { kick: 0 } => "rotateCw",
            Step::RotateCw { kick } if *kick < 0 => "rotateCwKickLeft",
            Step::RotateCw { .. } => "rotateCwKickRight",
            Step::MoveLeft => "moveLeft",
            Step::MoveRight => "moveRight",
        }
    }
}

/// Actions originating outside the autoplayer (the reset button, pause)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Toggle pause state
    Pause,
    /// Clear the board and start a new game
    Reset,
}

impl GameAction {
    /// Parse action from string
    ///
    /// ```
    /// use ledtris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("reset"), Some(GameAction::Reset));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_index_roundtrip_and_wrap() {
        for r in Rotation::ALL {
            assert_eq!(Rotation::from_index(r.index()), r);
        }
        assert_eq!(Rotation::from_index(5), Rotation::East);
    }

    #[test]
    fn step_displacement() {
        assert_eq!(Step::Idle.dx(), 0);
        assert_eq!(Step::RotateCw { kick: -1 }.dx(), -1);
        assert_eq!(Step::MoveRight.dx(), 1);
        assert_eq!(Step::RotateCw { kick: 1 }.as_str(), "rotateCwKickRight");
    }

    #[test]
    fn piece_kind_str_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }
}
