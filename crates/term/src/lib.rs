//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It renders into a plain
//! framebuffer that is then flushed to the terminal, instead of using a
//! widget toolkit.
//!
//! Goals:
//! - Keep `core` free of any presentation concern
//! - Pull-based: the view reads a `BoardSnapshot`, the core never pushes
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_stacker_core as core;
pub use tui_stacker_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
