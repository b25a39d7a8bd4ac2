//! JSON-lines event log.
//!
//! Each drained [`BoardEvent`] becomes one JSON object on its own line. The
//! terminal is in raw mode on the alternate screen while playing, so this file
//! is the only diagnostic channel during a game.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::BoardEvent;

/// One log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    Spawn {
        ts: u64,
        piece: String,
        piece_id: u32,
    },
    Lock {
        ts: u64,
        piece: String,
        x: i8,
        y: i8,
        lines_cleared: u8,
    },
    GameOver {
        ts: u64,
        piece_id: u32,
    },
}

impl EventRecord {
    pub fn from_event(event: &BoardEvent, ts: u64) -> Self {
        match *event {
            BoardEvent::Spawned { kind, piece_id } => EventRecord::Spawn {
                ts,
                piece: kind.as_str().to_string(),
                piece_id,
            },
            BoardEvent::Locked {
                kind,
                x,
                y,
                lines_cleared,
            } => EventRecord::Lock {
                ts,
                piece: kind.as_str().to_string(),
                x,
                y,
                lines_cleared,
            },
            BoardEvent::GameOver { piece_id } => EventRecord::GameOver { ts, piece_id },
        }
    }
}

/// Append-only event sink. A disabled log accepts and drops everything.
pub struct EventLog {
    writer: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        match config.event_log_path.as_deref() {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Write one event. The first write error disables the log.
    pub fn record(&mut self, event: &BoardEvent) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        let record = EventRecord::from_event(event, now_ms());
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if writer.write_all(&self.buf).is_err() {
            self.writer = None;
        }
    }

    pub fn record_all<'a>(&mut self, events: impl IntoIterator<Item = &'a BoardEvent>) {
        for event in events {
            self.record(event);
        }
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if writer.flush().is_err() {
                self.writer = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn records_serialize_with_type_tag() {
        let record = EventRecord::from_event(
            &BoardEvent::Locked {
                kind: PieceKind::O,
                x: 3,
                y: 18,
                lines_cleared: 2,
            },
            1000,
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "lock");
        assert_eq!(json["piece"], "o");
        assert_eq!(json["y"], 18);
        assert_eq!(json["lines_cleared"], 2);

        let over = serde_json::to_value(EventRecord::from_event(
            &BoardEvent::GameOver { piece_id: 9 },
            1,
        ))
        .unwrap();
        assert_eq!(over["type"], "game_over");
        assert_eq!(over["piece_id"], 9);
    }

    #[test]
    fn disabled_log_drops_events() {
        let mut log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.record(&BoardEvent::GameOver { piece_id: 1 });
        log.flush();
    }
}
