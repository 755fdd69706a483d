//! Shape catalog and rotation tests

use tetris_tick::core::{all_shapes, color_for, shape_for, Piece, ShapeMatrix};
use tetris_tick::types::{Color, ShapeKind, SHAPE_COUNT};

fn m(rows: &[&str]) -> ShapeMatrix {
    ShapeMatrix::parse(rows).unwrap()
}

/// Occupied cells of a matrix, shifted so the smallest row and column are 0.
fn normalized(matrix: &ShapeMatrix) -> Vec<(i8, i8)> {
    let cells: Vec<_> = matrix.occupied().collect();
    let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
    let mut out: Vec<_> = cells.iter().map(|&(x, y)| (x - min_x, y - min_y)).collect();
    out.sort();
    out
}

// ============== Catalog ==============

#[test]
fn test_catalog_has_seven_entries_in_order() {
    let defs = all_shapes();
    assert_eq!(defs.len(), SHAPE_COUNT);
    let kinds: Vec<_> = defs.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, ShapeKind::ALL.to_vec());
}

#[test]
fn test_catalog_colors_by_index() {
    let expected = [
        Color::Cyan,
        Color::Yellow,
        Color::Purple,
        Color::Blue,
        Color::Orange,
        Color::Green,
        Color::Red,
    ];
    for (def, color) in all_shapes().iter().zip(expected) {
        assert_eq!(def.color, color);
        assert_eq!(color_for(def.kind), color);
    }
}

#[test]
fn test_spawn_matrices() {
    assert_eq!(shape_for(ShapeKind::I), m(&["####"]));
    assert_eq!(shape_for(ShapeKind::O), m(&["##", "##"]));
    assert_eq!(shape_for(ShapeKind::T), m(&["###", ".#."]));
}

// ============== Rotation ==============

#[test]
fn test_four_rotations_are_identity() {
    for def in all_shapes() {
        let mut matrix = def.matrix;
        for _ in 0..4 {
            matrix = matrix.rotated_cw();
        }
        assert_eq!(matrix, def.matrix, "{:?}", def.kind);
        assert_eq!(normalized(&matrix), normalized(&def.matrix));
    }
}

#[test]
fn test_rotation_keeps_cell_count() {
    for def in all_shapes() {
        let mut matrix = def.matrix;
        for _ in 0..4 {
            matrix = matrix.rotated_cw();
            assert_eq!(matrix.count_occupied(), 4, "{:?}", def.kind);
        }
    }
}

#[test]
fn test_i_rotation_alternates_orientation() {
    let horizontal = shape_for(ShapeKind::I);
    let vertical = horizontal.rotated_cw();
    assert_eq!(vertical, m(&["#", "#", "#", "#"]));
    assert_eq!(vertical.rotated_cw(), horizontal);
}

#[test]
fn test_o_rotation_is_congruent() {
    let square = shape_for(ShapeKind::O);
    assert_eq!(square.rotated_cw(), square);
}

#[test]
fn test_t_rotation_sequence() {
    let north = shape_for(ShapeKind::T);
    let east = north.rotated_cw();
    let south = east.rotated_cw();
    let west = south.rotated_cw();

    assert_eq!(east, m(&[".#", "##", ".#"]));
    assert_eq!(south, m(&[".#.", "###"]));
    assert_eq!(west, m(&["#.", "##", "#."]));
}

#[test]
fn test_s_and_z_rotations() {
    assert_eq!(shape_for(ShapeKind::Z).rotated_cw(), m(&[".#", "##", "#."]));
    assert_eq!(shape_for(ShapeKind::S).rotated_cw(), m(&["#.", "##", ".#"]));
}

#[test]
fn test_piece_rotated_copy_matches_matrix_rotation() {
    for def in all_shapes() {
        let piece = Piece::from_def(def, 4, 0);
        assert_eq!(piece.rotated_copy(), def.matrix.rotated_cw());
        assert_eq!(piece.shape, def.matrix);
    }
}
