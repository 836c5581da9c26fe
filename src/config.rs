//! Resolved runtime settings.
//!
//! Settings come from the command line only; nothing is read from or written to
//! disk between runs.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::fields::{normalise_category, Theme};

/// Values the interface needs at mount time.
#[derive(Debug, Clone)]
pub struct Settings {
    pub theme: Theme,
    pub category: String,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: Theme::Light,
            category: normalise_category(""),
            log_file: None,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_cli(cli: &Cli, theme: Option<Theme>, category: Option<&str>) -> Self {
        Settings {
            theme: theme.unwrap_or_default(),
            category: normalise_category(category.unwrap_or_default()),
            log_file: cli.log_file.clone(),
            verbose: cli.verbose,
        }
    }
}
