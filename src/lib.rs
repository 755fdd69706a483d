//! Tick-driven falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, integration
//! tests and benches share a single import path.

pub use tetris_tick_core as core;
pub use tetris_tick_input as input;
pub use tetris_tick_term as term;
pub use tetris_tick_types as types;

pub mod logger;
