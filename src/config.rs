//! Runtime configuration read from `INVADERS_*` environment variables.
//!
//! Missing or unparsable values fall back to the defaults; numeric values are
//! clamped to a usable range rather than rejected.

use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::types::TICK_MS;

pub const ENV_TICK_MS: &str = "INVADERS_TICK_MS";
pub const ENV_SCALE: &str = "INVADERS_SCALE";
pub const ENV_KEY_RELEASE_MS: &str = "INVADERS_KEY_RELEASE_MS";
pub const ENV_LOG_PATH: &str = "INVADERS_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "INVADERS_LOG";

pub const DEFAULT_SCALE: u16 = 2;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Frame period in milliseconds (1..=1000).
    pub tick_ms: u32,
    /// Pixels per terminal column (1..=8).
    pub scale: u16,
    /// Auto-release timeout for held directions; `None` relies on release events.
    pub key_release_ms: Option<u32>,
    /// Log file; logging is off when unset.
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            scale: DEFAULT_SCALE,
            key_release_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let tick_ms = non_empty(ENV_TICK_MS)
            .and_then(|s| s.parse::<u32>().ok())
            .map(|v| v.clamp(1, 1000))
            .unwrap_or(defaults.tick_ms);

        let scale = non_empty(ENV_SCALE)
            .and_then(|s| s.parse::<u16>().ok())
            .map(|v| v.clamp(1, 8))
            .unwrap_or(defaults.scale);

        let key_release_ms = match non_empty(ENV_KEY_RELEASE_MS).and_then(|s| s.parse::<u32>().ok()) {
            Some(0) => None,
            Some(ms) => Some(ms),
            None => defaults.key_release_ms,
        };

        let log_path = non_empty(ENV_LOG_PATH);
        let log_filter = non_empty(ENV_LOG_FILTER).unwrap_or(defaults.log_filter);

        Self {
            tick_ms,
            scale,
            key_release_ms,
            log_path,
            log_filter,
        }
    }
}
