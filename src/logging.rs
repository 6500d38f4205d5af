//! File logging.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! log output never goes to stdout/stderr. It is written to `INVADERS_LOG_PATH`
//! when that is set and dropped otherwise.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

/// Install the global subscriber.
///
/// Returns the log path when logging was enabled.
pub fn init_tracing(config: &GameConfig) -> Result<Option<String>> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(Some(path.to_string()))
}
