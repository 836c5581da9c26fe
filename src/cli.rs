use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Single-screen checklist with prioritised, categorised tasks and subtasks.
/// State lives in memory for one run; nothing is saved.
#[derive(Parser)]
#[command(name = "checklist", version, about = "In-memory terminal checklist")]
pub struct Cli {
    /// Append logs to this file (the UI otherwise runs without logging).
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `ui`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}
