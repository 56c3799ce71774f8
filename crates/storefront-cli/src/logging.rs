use crate::types::LogLevel;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. With `log_file` set, events are
/// appended there; otherwise they go to stderr. Returns `false` when a
/// subscriber was already installed and is kept.
pub fn init(level: LogLevel, log_file: Option<&Path>) -> Result<bool> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time();

    // try_init: a subscriber may already be installed (tests, embedding)
    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if let Err(err) = installed {
        debug!(%err, "tracing subscriber already installed; keeping it");
        return Ok(false);
    }
    Ok(true)
}
