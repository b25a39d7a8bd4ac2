//! Runtime configuration for the terminal game.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_INTERVAL_MS;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity interval in milliseconds
    pub tick_ms: u64,
    /// Randomizer seed
    pub seed: u32,
    /// JSON-lines event log destination, disabled when `None`
    pub event_log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_INTERVAL_MS,
            seed: 1,
            event_log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `STACKER_TICK_MS`: gravity interval, a positive integer
    /// - `STACKER_SEED`: randomizer seed; derived from the clock when unset
    /// - `STACKER_LOG_PATH`: event log file; empty disables it
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("STACKER_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_INTERVAL_MS);

        let seed = lookup("STACKER_SEED")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or_else(clock_seed);

        let event_log_path = lookup("STACKER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick_ms,
            seed,
            event_log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_nanos() as u32) ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
