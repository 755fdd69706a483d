//! Grid module - the board of locked cells
//!
//! The grid is 10 columns by 20 rows. Each cell is empty or holds the colour
//! of a piece that locked there. Storage is a flat row-major array for cache
//! locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one [`Grid::clear_full_rows`] call, top to bottom,
/// relative to the grid before removal.
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The game grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and locked)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether `piece`, shifted by (dx, dy), fits.
    ///
    /// Every occupied cell must land inside the side walls, above the floor
    /// and, when at or below row 0, on an empty cell. Cells above the top row
    /// are allowed. Any offset is accepted; coordinates are widened to `i16`
    /// so extreme shifts are simply out of bounds.
    pub fn is_valid_placement(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        let origin_x = i16::from(piece.x) + i16::from(dx);
        let origin_y = i16::from(piece.y) + i16::from(dy);
        piece.shape.occupied().all(|(col, row)| {
            let x = origin_x + i16::from(col);
            let y = origin_y + i16::from(row);
            if x < 0 || x >= i16::from(BOARD_WIDTH) || y >= i16::from(BOARD_HEIGHT) {
                return false;
            }
            y < 0 || !self.is_occupied(x as i8, y as i8)
        })
    }

    /// Write the piece's colour into every cell it occupies.
    ///
    /// The caller has already validated the placement. Cells above the top
    /// row have nowhere to go and are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and drop the rows above into the gap.
    ///
    /// Full rows are found in one scan of the current grid, then removed in a
    /// single bottom-up compaction pass; one empty row is added at the top for
    /// each row removed. Returns the removed indices as they were before the
    /// call.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(y) {
                cleared.push(y as u8);
            }
        }
        if cleared.is_empty() {
            return cleared;
        }

        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top, sliding kept rows down over removed ones.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if cleared.contains(&(read_y as u8)) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        // Everything above the last kept row is new, empty space.
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a fixed-size 2D array (snapshot export)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape_def;
    use crate::types::{Color, ShapeKind};

    fn fill_row(grid: &mut Grid, y: i8, color: Color) {
        for x in 0..BOARD_WIDTH as i8 {
            grid.set(x, y, Some(color));
        }
    }

    #[test]
    fn test_placement_with_extreme_offsets() {
        let grid = Grid::new();
        let bar = Piece::from_def(shape_def(ShapeKind::I), 4, 0);

        assert!(!grid.is_valid_placement(&bar, i8::MAX, 0));
        assert!(!grid.is_valid_placement(&bar, i8::MIN, 0));
        assert!(!grid.is_valid_placement(&bar, 0, i8::MAX));
        // Entirely above the grid and inside the walls.
        assert!(grid.is_valid_placement(&bar, 0, i8::MIN));

        let far = Piece::from_def(shape_def(ShapeKind::O), i8::MAX, i8::MAX);
        assert!(!grid.is_valid_placement(&far, 1, 1));
        assert!(!grid.is_valid_placement(&far, i8::MIN, i8::MIN));
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
    }

    #[test]
    fn test_placement_allows_cells_above_top() {
        let grid = Grid::new();
        // Vertical I with its top two cells above row 0.
        let bar = Piece::from_def(shape_def(ShapeKind::I), 0, 0);
        let vertical = bar.with_shape(bar.rotated_copy());
        let lifted = Piece { y: -2, ..vertical };
        assert!(grid.is_valid_placement(&lifted, 0, 0));
        assert!(grid.is_valid_placement(&lifted, 0, -10));
    }

    #[test]
    fn test_lock_drops_cells_above_top() {
        let mut grid = Grid::new();
        let bar = Piece::from_def(shape_def(ShapeKind::I), 3, 0);
        let vertical = Piece {
            y: -2,
            ..bar.with_shape(bar.rotated_copy())
        };
        grid.lock(&vertical);
        let locked = grid.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(locked, 2);
        assert!(grid.is_occupied(3, 0));
        assert!(grid.is_occupied(3, 1));
    }

    #[test]
    fn test_clear_full_rows_adjacent_block() {
        let mut grid = Grid::new();
        for y in 16..20 {
            fill_row(&mut grid, y, Color::Cyan);
        }
        grid.set(0, 15, Some(Color::Red));

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
        assert_eq!(grid.get(0, 19), Some(Some(Color::Red)));
        assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_clear_full_rows_none() {
        let mut grid = Grid::new();
        grid.set(4, 19, Some(Color::Blue));
        let before = grid.clone();
        assert!(grid.clear_full_rows().is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_write_grid_matches_get() {
        let mut grid = Grid::new();
        grid.set(2, 7, Some(Color::Green));
        let mut out = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        grid.write_grid(&mut out);
        assert_eq!(out[7][2], Some(Color::Green));
        assert_eq!(out.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
