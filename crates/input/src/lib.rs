//! Terminal input module.
//!
//! Maps `crossterm` key events onto the few actions a viewer can take (reset,
//! pause, quit) and debounces them the way a physical reset button would be.

pub mod handler;
pub mod map;

pub use ledtris_types as types;

pub use handler::{ButtonHandler, DEFAULT_DEBOUNCE_MS};
pub use map::{handle_key_event, should_quit};
