//! Pieces module - tetromino shape matrices and rotation geometry
//!
//! A [`Shape`] is a small boolean matrix (at most 4x4) in the piece's local frame.
//! Row 0 is the top row and column 0 the leftmost column. Rotation is a pure
//! matrix transform with no pivot or kick offsets.

use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Largest dimension a shape can have (the vertical I)
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single mino relative to the shape frame's top-left corner
pub type MinoOffset = (i8, i8);

/// Occupancy matrix of a piece.
///
/// Each row is a bit mask read left to right: for a shape with `cols` columns,
/// column `c` is bit `cols - 1 - c`. That way a binary literal such as `0b010`
/// looks exactly like the row it describes. Bits outside the shape are always
/// zero, so derived equality compares dimensions and contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    masks: [u8; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from per-row masks.
    ///
    /// Dimensions are clamped to `1..=MAX_SHAPE_DIM` and stray bits are dropped.
    pub const fn new(rows: u8, cols: u8, masks: [u8; MAX_SHAPE_DIM]) -> Self {
        let rows = clamp_dim(rows);
        let cols = clamp_dim(cols);
        let keep = (1u8 << cols) - 1;
        let mut clean = [0u8; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < rows as usize {
            clean[r] = masks[r] & keep;
            r += 1;
        }
        Self {
            rows,
            cols,
            masks: clean,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at `(row, col)` of the local frame is occupied.
    /// Out-of-frame coordinates are empty.
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        (self.masks[row as usize] >> (self.cols - 1 - col)) & 1 == 1
    }

    /// Occupied cells as `(dx, dy)` offsets, row by row.
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols)
                .filter(move |&col| self.is_filled(row, col))
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Number of occupied cells
    pub fn mino_count(&self) -> u32 {
        self.masks.iter().map(|m| m.count_ones()).sum()
    }

    /// Rotate 90° clockwise.
    ///
    /// For an R x C shape the result is C x R, and source cell `(row, col)`
    /// lands on `(col, R - 1 - row)`.
    pub fn rotated_cw(&self) -> Self {
        let new_rows = self.cols;
        let new_cols = self.rows;
        let mut masks = [0u8; MAX_SHAPE_DIM];

        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.is_filled(row, col) {
                    let dst_row = col;
                    let dst_col = self.rows - 1 - row;
                    masks[dst_row as usize] |= 1 << (new_cols - 1 - dst_col);
                }
            }
        }

        Self {
            rows: new_rows,
            cols: new_cols,
            masks,
        }
    }

    /// Rotate 90° counter-clockwise (three clockwise turns).
    pub fn rotated_ccw(&self) -> Self {
        self.rotated_cw().rotated_cw().rotated_cw()
    }
}

const fn clamp_dim(v: u8) -> u8 {
    if v == 0 {
        1
    } else if v as usize > MAX_SHAPE_DIM {
        MAX_SHAPE_DIM as u8
    } else {
        v
    }
}

const I_SHAPE: Shape = Shape::new(1, 4, [0b1111, 0, 0, 0]);
const O_SHAPE: Shape = Shape::new(2, 2, [0b11, 0b11, 0, 0]);
const T_SHAPE: Shape = Shape::new(2, 3, [0b010, 0b111, 0, 0]);
const S_SHAPE: Shape = Shape::new(2, 3, [0b110, 0b011, 0, 0]);
const Z_SHAPE: Shape = Shape::new(2, 3, [0b011, 0b110, 0, 0]);
const L_SHAPE: Shape = Shape::new(2, 3, [0b111, 0b100, 0, 0]);
const J_SHAPE: Shape = Shape::new(2, 3, [0b111, 0b001, 0, 0]);

/// Spawn orientation of each piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (SPAWN_X, SPAWN_Y);

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(shape: &Shape) -> Vec<String> {
        (0..shape.rows())
            .map(|r| {
                (0..shape.cols())
                    .map(|c| if shape.is_filled(r, c) { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn canonical_patterns_match_table() {
        assert_eq!(rows_of(&get_shape(PieceKind::I)), ["1111"]);
        assert_eq!(rows_of(&get_shape(PieceKind::O)), ["11", "11"]);
        assert_eq!(rows_of(&get_shape(PieceKind::T)), ["010", "111"]);
        assert_eq!(rows_of(&get_shape(PieceKind::S)), ["110", "011"]);
        assert_eq!(rows_of(&get_shape(PieceKind::Z)), ["011", "110"]);
        assert_eq!(rows_of(&get_shape(PieceKind::L)), ["111", "100"]);
        assert_eq!(rows_of(&get_shape(PieceKind::J)), ["111", "001"]);
    }

    #[test]
    fn every_canonical_shape_has_four_minos() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).mino_count(), 4, "{:?}", kind);
            assert_eq!(get_shape(kind).minos().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn new_drops_stray_bits() {
        let shape = Shape::new(2, 2, [0b111, 0b11, 0b1, 0]);
        assert_eq!(shape, Shape::new(2, 2, [0b11, 0b11, 0, 0]));
    }

    #[test]
    fn t_rotates_clockwise_onto_its_side() {
        let east = get_shape(PieceKind::T).rotated_cw();
        assert_eq!(rows_of(&east), ["10", "11", "10"]);
    }

    #[test]
    fn l_rotates_clockwise() {
        // 111      11
        // 100  ->  01
        //          01
        let east = get_shape(PieceKind::L).rotated_cw();
        assert_eq!(rows_of(&east), ["11", "01", "01"]);
    }

    #[test]
    fn i_rotation_swaps_dimensions() {
        let vertical = get_shape(PieceKind::I).rotated_cw();
        assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
        assert_eq!(rows_of(&vertical), ["1", "1", "1", "1"]);
    }

    #[test]
    fn minos_are_column_row_offsets() {
        let offsets: Vec<_> = get_shape(PieceKind::T).minos().collect();
        assert_eq!(offsets, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
