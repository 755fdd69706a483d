//! Active falling piece
//!
//! A piece is plain data: an origin, a shape matrix and a colour. It never
//! checks the grid itself; the engine validates every move against the
//! [`Grid`](crate::grid::Grid) before mutating the piece.

use crate::matrix::ShapeMatrix;
use crate::rng::SimpleRng;
use crate::shapes::{shape_def, ShapeDef};
use crate::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Column of the matrix's top-left corner
    pub x: i8,
    /// Row of the matrix's top-left corner (may be negative after rotation)
    pub y: i8,
    pub shape: ShapeMatrix,
    pub color: Color,
}

impl Piece {
    pub fn new(x: i8, y: i8, shape: ShapeMatrix, color: Color) -> Self {
        Self { x, y, shape, color }
    }

    /// Create a piece from a catalog entry
    pub fn from_def(def: &ShapeDef, x: i8, y: i8) -> Self {
        Self::new(x, y, def.matrix, def.color)
    }

    /// Spawn a uniformly random catalog piece at the given origin
    pub fn spawn(spawn_x: i8, spawn_y: i8, rng: &mut SimpleRng) -> Self {
        let kind = rng.choose_kind();
        Self::from_def(shape_def(kind), spawn_x, spawn_y)
    }

    /// Shift the origin; no bounds checking. Saturates at the `i8` range.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
    }

    /// Clockwise rotation of the current matrix. The piece is left untouched.
    pub fn rotated_copy(&self) -> ShapeMatrix {
        self.shape.rotated_cw()
    }

    /// Same origin and colour with a different matrix
    pub fn with_shape(&self, shape: ShapeMatrix) -> Self {
        Self { shape, ..*self }
    }

    /// Absolute grid coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}
