//! Board module - the game state machine
//!
//! The board owns the settled [`Grid`], the single active [`Piece`] and the
//! randomizer. It enforces every rule: a piece only ever occupies in-bounds,
//! empty cells, because any move or rotation that would break that is rejected
//! before it is applied.
//!
//! All methods assume serialized calls from one owner (the host's event loop).

use arrayvec::ArrayVec;

use crate::grid::{ClearedRows, Grid};
use crate::piece::Piece;
use crate::pieces::Shape;
use crate::rng::PieceRandomizer;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot};
use crate::types::{BoardEvent, GameAction, PieceKind};

/// Pending events kept for the host before the oldest are dropped
pub const EVENT_CAPACITY: usize = 8;

/// Events drained by [`Board::take_events`]
pub type BoardEvents = ArrayVec<BoardEvent, EVENT_CAPACITY>;

/// Lifecycle of a board. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What a single gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active piece moved down one row.
    Fell,
    /// The piece was committed, lines were cleared and a new piece spawned.
    Locked,
    /// The piece was committed but the next piece could not spawn; the game is over.
    ToppedOut,
    /// The game was already over; nothing changed.
    Halted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    active: Piece,
    randomizer: PieceRandomizer,
    status: GameStatus,
    /// Monotonic count of spawn attempts (the failed one included).
    pieces_spawned: u32,
    events: BoardEvents,
}

impl Board {
    /// Create a board with an empty grid and spawn the first piece
    pub fn new(seed: u32) -> Self {
        Self::with_grid(Grid::new(), seed)
    }

    /// Create a board on a pre-seeded grid and spawn the first piece.
    ///
    /// The board is already over if that first spawn is blocked.
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let mut randomizer = PieceRandomizer::new(seed);
        let active = Piece::spawn(&mut randomizer);
        let mut board = Self {
            grid,
            active,
            randomizer,
            status: GameStatus::Running,
            pieces_spawned: 0,
            events: BoardEvents::new(),
        };
        board.install(active);
        board
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to settled cells, for seeding positions.
    ///
    /// Writing under the active piece breaks the placement invariant until the
    /// next spawn; if the piece locks first, its cells overwrite those writes.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    /// Whether `shape` fits with its frame at `(x, y)`.
    ///
    /// The one legality check used by movement, rotation and spawn.
    pub fn can_place(&self, x: i8, y: i8, shape: &Shape) -> bool {
        self.grid.can_place(x, y, shape)
    }

    /// Replace the active piece with a random new one.
    ///
    /// Returns false and ends the game if it cannot be placed.
    pub fn spawn_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let piece = Piece::spawn(&mut self.randomizer);
        self.install(piece)
    }

    /// Replace the active piece with a new piece of `kind`.
    ///
    /// Same rules as [`Board::spawn_piece`] without consulting the randomizer.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.install(Piece::new(kind))
    }

    fn install(&mut self, piece: Piece) -> bool {
        self.active = piece;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if !self.can_place(piece.x, piece.y, &piece.shape) {
            self.status = GameStatus::GameOver;
            self.push_event(BoardEvent::GameOver {
                piece_id: self.pieces_spawned,
            });
            return false;
        }

        self.push_event(BoardEvent::Spawned {
            kind: piece.kind,
            piece_id: self.pieces_spawned,
        });
        true
    }

    /// Gravity step: fall one row, or commit and respawn.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Halted;
        }

        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        self.lock_piece();
        if self.spawn_piece() {
            TickOutcome::Locked
        } else {
            TickOutcome::ToppedOut
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row if possible. Never locks the piece.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate clockwise in place; undone if the result collides.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.active.rotate();
        if self.can_place(self.active.x, self.active.y, &self.active.shape) {
            return true;
        }

        self.active.rotate_back();
        false
    }

    /// Dispatch a player action. Returns whether the piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Remove full rows from the grid.
    ///
    /// The returned rows are informational; nothing is scored and the board
    /// keeps no line count.
    pub fn clear_lines(&mut self) -> ClearedRows {
        if self.is_game_over() {
            return ClearedRows::new();
        }
        self.grid.clear_full_rows()
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.is_game_over() {
            return false;
        }

        let moved = self.active.translated(dx, dy);
        if !self.can_place(moved.x, moved.y, &moved.shape) {
            return false;
        }

        self.active = moved;
        true
    }

    /// Commit the active piece and clear lines. Does not spawn.
    fn lock_piece(&mut self) {
        let piece = self.active;
        // Stamped unconditionally: cells written through `grid_mut` under the
        // piece are overwritten rather than losing the piece.
        self.grid.stamp_shape(&piece.shape, piece.x, piece.y, piece.kind);

        let cleared = self.clear_lines();
        self.push_event(BoardEvent::Locked {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            lines_cleared: cleared.len() as u8,
        });
    }

    fn push_event(&mut self, event: BoardEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Take all pending events, oldest first.
    pub fn take_events(&mut self) -> BoardEvents {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.game_over = self.is_game_over();
        out.pieces_spawned = self.pieces_spawned;
        out.seed = self.randomizer.seed();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
