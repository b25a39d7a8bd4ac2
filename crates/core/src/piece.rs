//! Active piece - geometry only
//!
//! A [`Piece`] knows its shape and where its frame sits on the grid. It never
//! looks at the board: legality of a translation or rotation is decided by
//! [`crate::Board`], which undoes or skips the change when it would collide.

use crate::pieces::{get_shape, Shape, SPAWN_POSITION};
use crate::rng::PieceRandomizer;
use crate::types::PieceKind;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Column of the shape frame's top-left corner
    pub x: i8,
    /// Row of the shape frame's top-left corner
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` in its spawn orientation at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            shape: get_shape(kind),
            x,
            y,
        }
    }

    /// Create a piece of a uniformly random kind at the spawn position
    pub fn spawn(randomizer: &mut PieceRandomizer) -> Self {
        Self::new(randomizer.next_kind())
    }

    /// Move by `(dx, dy)`, saturating at the `i8` range
    pub fn translate(&mut self, dx: i8, dy: i8) {
        *self = self.translated(dx, dy);
    }

    /// Copy of this piece moved by `(dx, dy)`, saturating at the `i8` range.
    /// A saturated position is always off the grid.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Rotate clockwise in place (position unchanged)
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated_cw();
    }

    /// Undo one [`Piece::rotate`]
    pub fn rotate_back(&mut self) {
        self.shape = self.shape.rotated_ccw();
    }

    /// Absolute grid coordinates `(x, y)` of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}
