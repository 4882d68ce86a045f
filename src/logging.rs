//! `tracing` setup for the binary.
//!
//! The game owns the terminal, so log output only ever goes to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-backed subscriber when `log_path` is set.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`. Returns whether a
/// subscriber was installed.
pub fn init(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(true)
}
