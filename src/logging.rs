//! Tracing setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so UI sessions only log
//! when a log file is given. Replay runs log to stderr.
//!
//! `RUST_LOG` overrides the default filter.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "checklist=debug" } else { "checklist=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Append log lines to `path`.
pub fn init_file(path: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Compact log lines on stderr.
pub fn init_stderr(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
