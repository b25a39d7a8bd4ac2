//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. There is no
//! repeat or debounce logic here: one key event is one action, and held keys
//! repeat at whatever rate the terminal reports.

pub mod map;

pub use tui_stacker_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
