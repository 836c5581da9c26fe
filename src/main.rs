//! # Checklist - single-screen terminal checklist
//!
//! Create tasks with a priority and a category, attach subtasks, tick things off,
//! filter by category and switch between light and dark themes. Everything lives
//! in memory for one run of the screen; nothing is saved.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the checklist (same as `checklist ui`)
//! checklist
//!
//! # Start in dark mode showing only work tasks
//! checklist ui --theme dark --category work
//!
//! # Apply a scripted list of actions and print the result
//! checklist replay actions.json --json
//! ```
//!
//! ## Key Commands
//!
//! - `checklist ui` - Interactive screen (`a` add task, `s` add subtask, space toggle,
//!   `f` cycle category, `t` toggle theme, `h` help)
//! - `checklist replay <file>` - Drive the task list from a JSON action file
//! - `checklist completions <shell>` - Shell completion scripts
//!
//! Logs are written only when `--log-file` is given for the UI; `replay` logs to
//! stderr. `RUST_LOG` overrides the filter.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod fields;
pub mod list;
pub mod logging;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use config::Settings;
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => {
            let settings = Settings::from_cli(cli, None, None);
            init_ui_logging(&settings)?;
            cmd_ui(&settings)
        }
        Some(Commands::Ui { theme, category }) => {
            let settings = Settings::from_cli(cli, *theme, category.as_deref());
            init_ui_logging(&settings)?;
            cmd_ui(&settings)
        }
        Some(Commands::Replay { input, json, category }) => {
            match &cli.log_file {
                Some(path) => logging::init_file(path, cli.verbose)?,
                None => logging::init_stderr(cli.verbose)?,
            }
            cmd_replay(input, *json, category)
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(*shell);
            Ok(())
        }
    }
}

/// The screen owns the terminal, so the UI only logs to a file.
fn init_ui_logging(settings: &Settings) -> Result<()> {
    match &settings.log_file {
        Some(path) => logging::init_file(path, settings.verbose),
        None => Ok(()),
    }
}
