//! Fixed-size, copyable view of the engine state for one rendered frame

use crate::engine::Status;
use crate::matrix::ShapeMatrix;
use crate::piece::Piece;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub x: i8,
    pub y: i8,
    pub shape: ShapeMatrix,
    pub color: Color,
}

impl ActiveSnapshot {
    /// Absolute coordinates of the piece's occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            x: value.x,
            y: value.y,
            shape: value.shape,
            color: value.color,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Snapshot {
    pub grid: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub status: Status,
}

impl Snapshot {
    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Absolute cells of the active piece, empty when there is none
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.active.iter().flat_map(|a| a.cells())
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: Status::Running,
        }
    }
}
