//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It has **zero
//! dependencies** on UI, timers or I/O: a host drives it by calling
//! [`Board::tick`] on a fixed interval and one movement method per key press,
//! and reads a [`BoardSnapshot`] to draw.
//!
//! # Module Structure
//!
//! - [`pieces`]: shape matrices, the canonical table and clockwise rotation
//! - [`piece`]: the active piece (shape + position), geometry only
//! - [`grid`]: 10x20 settled cells, placement checks and line clearing
//! - [`board`]: the state machine tying grid, piece and randomizer together
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: fixed-size copies of state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at (3, 0) with a uniformly random kind
//! - Each tick the piece falls one row, or locks if it cannot
//! - Moves and rotations that would collide are silently rejected
//! - Rotation is in place with no wall kicks
//! - Full rows are removed and everything above shifts down
//! - The game ends when a new piece cannot be placed at spawn
//!
//! # Example
//!
//! ```
//! use tui_stacker_core::{Board, TickOutcome};
//! use tui_stacker_types::GameAction;
//!
//! let mut board = Board::new(12345);
//!
//! board.apply_action(GameAction::MoveRight);
//! board.apply_action(GameAction::Rotate);
//!
//! assert_eq!(board.tick(), TickOutcome::Fell);
//! assert!(!board.is_game_over());
//! ```

pub mod board;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tui_stacker_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardEvents, GameStatus, TickOutcome};
pub use grid::{ClearedRows, Grid};
pub use piece::Piece;
pub use pieces::{get_shape, Shape, SPAWN_POSITION};
pub use rng::{PieceRandomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, BoardSnapshot};
