//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the tick state machine. It has
//! **no dependencies** on terminals, input devices or clocks:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Host-agnostic**: the engine is driven by explicit calls, never by timers
//! - **Allocation-free**: grids, matrices and snapshots are fixed-size values
//!
//! # Module Structure
//!
//! - [`matrix`]: boolean shape matrix and its clockwise rotation
//! - [`shapes`]: the seven catalog shapes, each paired with a colour
//! - [`piece`]: the active falling piece
//! - [`grid`]: 10x20 grid with placement checks, locking and row clearing
//! - [`engine`]: command handling and the per-tick gravity/lock/spawn cycle
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: fixed-size render snapshot
//!
//! # Game Rules
//!
//! - Pieces spawn with their top-left corner at (4, 0)
//! - Moves and rotations that would overlap a wall, the floor or a locked
//!   cell are silently rejected
//! - Rotation is a plain 90° clockwise matrix turn with no wall kicks
//! - A piece that cannot fall on a tick locks immediately; full rows clear
//! - The game ends when a freshly spawned piece overlaps locked cells
//!
//! # Example
//!
//! ```
//! use tetris_tick_core::{Engine, Status};
//! use tetris_tick_core::types::Command;
//!
//! let mut engine = Engine::new(12345);
//!
//! // One host-loop iteration: drain input, then one gravity tick.
//! let snapshot = engine.step(&[Command::MoveLeft, Command::Rotate]);
//!
//! assert_eq!(snapshot.status, Status::Running);
//! assert!(snapshot.active.is_some());
//! ```
//!
//! # Timing
//!
//! The engine never looks at a clock. Hosts call [`Engine::tick`] (or
//! [`Engine::step`]) once every [`types::TICK_MS`] milliseconds.

pub mod engine;
pub mod grid;
pub mod matrix;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use tetris_tick_types as types;

// Re-export commonly used types for convenience
pub use engine::{Engine, LockEvent, Status, TickOutcome};
pub use grid::{ClearedRows, Grid};
pub use matrix::ShapeMatrix;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::{all_shapes, color_for, shape_def, shape_for, ShapeDef};
pub use snapshot::{ActiveSnapshot, Snapshot};
