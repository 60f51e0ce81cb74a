//! Start-up configuration, read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LEDTRIS_SEED` | 1 | Seed for the piece sequence and blunders |
//! | `LEDTRIS_MOVE_MS` | 120 | Interval between autoplay steps |
//! | `LEDTRIS_DROP_MS` | 400 | Gravity interval |
//! | `LEDTRIS_BLUNDER_PCT` | 0 | Chance of a random step instead of the planned one |
//! | `LEDTRIS_HOLE_PENALTY` | 8 | Score weight per hole |
//! | `LEDTRIS_LINE_BONUS` | 10 | Score weight per cleared line |
//! | `LEDTRIS_HEIGHT_PENALTY` | 2 | Score weight per row of stack height |
//! | `LEDTRIS_RESET_DELAY_MS` | 1500 | Pause on the final board before resetting |
//! | `LEDTRIS_GAMES` | 10 | Games played by `autoplay-sim` |
//!
//! Unset or unparsable values fall back to the default. Out-of-range values are
//! clamped; weights to `0..=MAX_WEIGHT`.

use std::str::FromStr;

use crate::core::GameState;
use crate::engine::{Autoplayer, Blunder, Weights, MAX_WEIGHT};
use crate::types::{DEFAULT_DROP_MS, DEFAULT_MOVE_MS, DEFAULT_RESET_DELAY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub seed: u32,
    pub move_ms: u32,
    pub drop_ms: u32,
    pub blunder_pct: u8,
    pub weights: Weights,
    pub reset_delay_ms: u32,
    pub games: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            move_ms: DEFAULT_MOVE_MS,
            drop_ms: DEFAULT_DROP_MS,
            blunder_pct: 0,
            weights: Weights::default(),
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            games: 10,
        }
    }
}

impl AutoplayConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        // Values are clamped in i64 before narrowing, so nothing wraps.
        let get = |key: &str, default: i64, min: i64, max: i64| {
            parse_or(lookup(key), default).clamp(min, max)
        };
        let ms = |key: &str, default: u32, min: i64| {
            get(key, default as i64, min, u32::MAX as i64) as u32
        };
        let weight = |key: &str, default: i32| get(key, default as i64, 0, MAX_WEIGHT as i64) as i32;

        Self {
            seed: get("LEDTRIS_SEED", d.seed as i64, 0, u32::MAX as i64) as u32,
            move_ms: ms("LEDTRIS_MOVE_MS", d.move_ms, 1),
            drop_ms: ms("LEDTRIS_DROP_MS", d.drop_ms, 1),
            blunder_pct: get("LEDTRIS_BLUNDER_PCT", d.blunder_pct as i64, 0, 100) as u8,
            weights: Weights {
                hole_penalty: weight("LEDTRIS_HOLE_PENALTY", d.weights.hole_penalty),
                line_clear_bonus: weight("LEDTRIS_LINE_BONUS", d.weights.line_clear_bonus),
                height_penalty: weight("LEDTRIS_HEIGHT_PENALTY", d.weights.height_penalty),
            },
            reset_delay_ms: ms("LEDTRIS_RESET_DELAY_MS", d.reset_delay_ms, 0),
            games: ms("LEDTRIS_GAMES", d.games, 1),
        }
    }

    /// A started game using the configured seed and gravity
    pub fn new_game(&self) -> GameState {
        let mut game = GameState::with_drop_interval(self.seed, self.drop_ms);
        game.start();
        game
    }

    /// An autoplayer with the configured weights (and blunders, if enabled)
    pub fn new_autoplayer(&self) -> Autoplayer {
        let player = Autoplayer::new(self.weights);
        if self.blunder_pct > 0 {
            // Separate stream from the piece queue so blunders don't change the sequence.
            player.with_blunder(Blunder::new(self.blunder_pct, self.seed.rotate_left(16) ^ 0x5bd1))
        } else {
            player
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}
