//! Shape catalog - the seven tetromino matrices and their colours
//!
//! Each entry is an explicit [`ShapeDef`] so a shape never has to be matched
//! back to its position to find its colour.

use crate::matrix::{ShapeMatrix, MAX_DIM};
use crate::types::{Color, ShapeKind, SHAPE_COUNT};

/// One catalog entry: a spawn matrix paired with its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub matrix: ShapeMatrix,
    pub color: Color,
}

const X: bool = true;
const O: bool = false;
const PAD: [bool; MAX_DIM] = [O; MAX_DIM];

/// Ordered catalog; entry `i` is `ShapeKind::ALL[i]`.
static CATALOG: [ShapeDef; SHAPE_COUNT] = [
    ShapeDef {
        kind: ShapeKind::I,
        matrix: ShapeMatrix::new(1, 4, [[X, X, X, X], PAD, PAD, PAD]),
        color: Color::Cyan,
    },
    ShapeDef {
        kind: ShapeKind::O,
        matrix: ShapeMatrix::new(2, 2, [[X, X, O, O], [X, X, O, O], PAD, PAD]),
        color: Color::Yellow,
    },
    ShapeDef {
        kind: ShapeKind::T,
        matrix: ShapeMatrix::new(2, 3, [[X, X, X, O], [O, X, O, O], PAD, PAD]),
        color: Color::Purple,
    },
    ShapeDef {
        kind: ShapeKind::L,
        matrix: ShapeMatrix::new(2, 3, [[X, X, X, O], [X, O, O, O], PAD, PAD]),
        color: Color::Blue,
    },
    ShapeDef {
        kind: ShapeKind::J,
        matrix: ShapeMatrix::new(2, 3, [[X, X, X, O], [O, O, X, O], PAD, PAD]),
        color: Color::Orange,
    },
    ShapeDef {
        kind: ShapeKind::Z,
        matrix: ShapeMatrix::new(2, 3, [[X, X, O, O], [O, X, X, O], PAD, PAD]),
        color: Color::Green,
    },
    ShapeDef {
        kind: ShapeKind::S,
        matrix: ShapeMatrix::new(2, 3, [[O, X, X, O], [X, X, O, O], PAD, PAD]),
        color: Color::Red,
    },
];

/// All catalog entries in order
pub fn all_shapes() -> &'static [ShapeDef; SHAPE_COUNT] {
    &CATALOG
}

/// Catalog entry for a kind
pub fn shape_def(kind: ShapeKind) -> &'static ShapeDef {
    &CATALOG[kind.index()]
}

/// Spawn matrix for a kind
pub fn shape_for(kind: ShapeKind) -> ShapeMatrix {
    shape_def(kind).matrix
}

/// Colour paired with a kind
pub fn color_for(kind: ShapeKind) -> Color {
    shape_def(kind).color
}
