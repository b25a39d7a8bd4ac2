//! Grid module - the settled cells
//!
//! The grid is a 10x20 array where each cell is empty or holds the identity of
//! the piece that locked there. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of rows, as a capacity for row lists
pub const GRID_ROWS: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one line clear, bottom to top
pub type ClearedRows = ArrayVec<usize, GRID_ROWS>;

/// Settled cells - 10 columns x 20 rows using flat array storage
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

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether every occupied cell of `shape`, with its frame at `(x, y)`,
    /// lands on an in-bounds empty cell. Defined for any `(x, y)`.
    pub fn can_place(&self, x: i8, y: i8, shape: &Shape) -> bool {
        shape
            .minos()
            .all(|(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(cx), Some(cy)) => self.is_valid(cx, cy),
                _ => false,
            })
    }

    /// Write `kind` into every occupied cell of `shape` at `(x, y)`.
    /// Returns false (and writes nothing) if the shape does not fit.
    pub fn lock_shape(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> bool {
        if !self.can_place(x, y, shape) {
            return false;
        }
        self.stamp_shape(shape, x, y, kind);
        true
    }

    /// Write `kind` into every in-bounds cell of `shape` at `(x, y)`,
    /// overwriting whatever is there. Out-of-bounds cells are skipped.
    pub fn stamp_shape(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.minos() {
            if let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) {
                self.set(cx, cy, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= GRID_ROWS {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Remove all full rows and compact the rest downward.
    ///
    /// Single bottom-to-top pass: `read_y` visits every row once, surviving
    /// rows are copied to `write_y`, and whatever is left above `write_y`
    /// becomes empty. A row is never examined after it has been moved, so
    /// adjacent full rows cannot be skipped.
    ///
    /// Returns the cleared row indices (original positions, bottom to top).
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = GRID_ROWS;

        for read_y in (0..GRID_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Export as snapshot codes (0 = empty, else [`PieceKind::code`])
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[start + x].map(|k| k.code()).unwrap_or(0);
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a grid from text rows, top row first.
    ///
    /// `.` is empty, a piece letter (`I O T S Z L J`, any case) is a settled
    /// cell of that kind and any other character is an `I` cell. Missing rows
    /// are filled from the top with empty rows, so `rows` describes the
    /// bottom of the grid. Extra rows or columns are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        let skip = rows.len().saturating_sub(GRID_ROWS);
        let offset = GRID_ROWS.saturating_sub(rows.len());

        for (i, line) in rows.iter().skip(skip).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                let cell = match ch {
                    '.' => None,
                    other => Some(
                        PieceKind::from_str(other.encode_utf8(&mut [0u8; 4]))
                            .unwrap_or(PieceKind::I),
                    ),
                };
                grid.set(x as i8, y, cell);
            }
        }

        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
