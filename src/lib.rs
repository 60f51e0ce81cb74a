//! ledtris (workspace facade crate).
//!
//! Re-exports the member crates as `ledtris::{core,engine,input,term,types}` and
//! holds the start-up configuration shared by the binaries.

pub mod config;

pub use ledtris_core as core;
pub use ledtris_engine as engine;
pub use ledtris_input as input;
pub use ledtris_term as term;
pub use ledtris_types as types;

pub use config::AutoplayConfig;
