//! Boolean shape matrix with a clockwise rotation transform.
//!
//! Matrices are at most 4x4 and stored inline, so they are `Copy` and never
//! allocate. Cells outside `rows x cols` are always `false`.

/// Largest row or column count a shape can have
pub const MAX_DIM: usize = 4;

/// Immutable R x C matrix of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_DIM]; MAX_DIM],
}

impl ShapeMatrix {
    /// Build a matrix from a padded 4x4 grid, keeping only the top-left
    /// `rows x cols` region.
    pub const fn new(rows: u8, cols: u8, grid: [[bool; MAX_DIM]; MAX_DIM]) -> Self {
        assert!(rows as usize <= MAX_DIM && cols as usize <= MAX_DIM);
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                cells[r][c] = grid[r][c];
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, cells }
    }

    /// Parse rows of `#` (occupied) and `.` (empty); used by tests and tools.
    ///
    /// Returns `None` for ragged rows, empty input, anything larger than 4x4
    /// or characters other than `#` and `.`.
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        if rows.len() > MAX_DIM || cols == 0 || cols > MAX_DIM {
            return None;
        }

        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != cols {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                cells[r][c] = match ch {
                    '#' => true,
                    '.' => false,
                    _ => return None,
                };
            }
        }

        Some(Self::new(rows.len() as u8, cols as u8, cells))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether `(row, col)` is occupied; out-of-range positions are empty
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Occupied cells as `(col, row)` offsets from the top-left corner,
    /// row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }

    pub fn count_occupied(&self) -> usize {
        self.occupied().count()
    }

    /// 90° clockwise rotation.
    ///
    /// An R x C matrix becomes C x R with `rotated[c][R - 1 - r] = self[r][c]`
    /// (reverse the row order, then transpose).
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for r in 0..rows {
            for c in 0..self.cols as usize {
                cells[c][rows - 1 - r] = self.cells[r][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}
