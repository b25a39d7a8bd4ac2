//! Read-only copies of board state for renderers and other observers.

use crate::piece::Piece;
use crate::pieces::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute grid coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    /// Settled cells as [`PieceKind::code`] values, 0 for empty
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
    pub pieces_spawned: u32,
    pub seed: u32,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.game_over = false;
        self.pieces_spawned = 0;
        self.seed = 0;
    }

    /// Settled kind at `(x, y)`, `None` if empty or out of bounds
    pub fn settled(&self, x: usize, y: usize) -> Option<PieceKind> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(|&code| PieceKind::from_code(code))
    }

    /// Cheap change detector for render throttling (FNV-1a over the contents).
    pub fn fingerprint(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut h = OFFSET;
        let mut feed = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(PRIME);
        };

        for row in &self.board {
            for &v in row {
                feed(v);
            }
        }
        match self.active {
            Some(a) => {
                feed(a.kind.code());
                feed(a.x as u8);
                feed(a.y as u8);
                for (dx, dy) in a.shape.minos() {
                    feed(dx as u8);
                    feed(dy as u8);
                }
            }
            None => feed(0xff),
        }
        feed(self.game_over as u8);
        h
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            game_over: false,
            pieces_spawned: 0,
            seed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_decodes_codes() {
        let mut snap = BoardSnapshot::default();
        snap.board[19][4] = PieceKind::Z.code();
        assert_eq!(snap.settled(4, 19), Some(PieceKind::Z));
        assert_eq!(snap.settled(5, 19), None);
        assert_eq!(snap.settled(10, 19), None);
        assert_eq!(snap.settled(0, 20), None);
    }

    #[test]
    fn fingerprint_tracks_board_and_active() {
        let mut snap = BoardSnapshot::default();
        let empty = snap.fingerprint();

        snap.board[0][0] = 1;
        let filled = snap.fingerprint();
        assert_ne!(empty, filled);

        snap.active = Some(ActiveSnapshot::from(Piece::new(PieceKind::T)));
        let with_piece = snap.fingerprint();
        assert_ne!(filled, with_piece);

        snap.clear();
        assert_eq!(snap.fingerprint(), empty);
    }
}
