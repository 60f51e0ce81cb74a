//! LED matrix rendering.
//!
//! The board maps 1:1 onto a 7x10 matrix of RGB LEDs. [`MatrixView`] turns a
//! game state into a [`PixelBuffer`]; [`TerminalRenderer`] previews that buffer
//! in a terminal so the autoplay can be watched without hardware.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use ledtris_core as core;
pub use ledtris_types as types;

pub use fb::{PixelBuffer, Rgb, LED_COUNT};
pub use game_view::{piece_color, MatrixView};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
