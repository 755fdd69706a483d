//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Command`]. Only key-press
//! edges become commands; the host is expected to drop repeat and release
//! events before calling [`map_key_event`].

pub mod map;

pub use tetris_tick_types as types;

pub use map::{is_press, map_key_event, should_quit};
