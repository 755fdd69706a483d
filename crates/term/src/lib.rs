//! Terminal front-end for the engine.
//!
//! Renders into a plain framebuffer that is then flushed to a crossterm
//! backend, rather than going through a widget toolkit.
//!
//! - [`fb`]: glyphs, styles and the framebuffer
//! - [`game_view`]: snapshot → framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer → terminal, with run-length diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_tick_core as core;
pub use tetris_tick_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
