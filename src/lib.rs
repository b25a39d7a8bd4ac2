//! TUI Stacker (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_stacker::{core, input, term, types}`
//! and hosts the binary's configuration and event log.

pub mod config;
pub mod event_log;

pub use tui_stacker_core as core;
pub use tui_stacker_input as input;
pub use tui_stacker_term as term;
pub use tui_stacker_types as types;

pub use config::GameConfig;
pub use event_log::{EventLog, EventRecord};
