//! Command implementations for the CLI interface.
//!
//! `ui` mounts the interactive screen, `replay` drives the task list from a JSON
//! action script and prints the result, and `completions` emits shell completion
//! scripts.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::fields::{normalise_category, Priority, Theme, ALL_CATEGORIES};
use crate::list::{completion_percentage, filter_by_category, Rejection, TaskList};
use crate::task::Task;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive checklist screen.
    Ui {
        /// Colour theme: light | dark.
        #[arg(long, value_enum)]
        theme: Option<Theme>,
        /// Category filter to start with (all, work, personal or any other).
        #[arg(long)]
        category: Option<String>,
    },

    /// Apply a JSON list of actions to an empty checklist and print the result.
    Replay {
        /// Path to a JSON array of actions.
        input: PathBuf,
        /// Print tasks as JSON instead of a table.
        #[arg(long)]
        json: bool,
        /// Only print tasks in this category.
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// One scripted operation on the task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    AddTask {
        text: String,
        #[serde(default)]
        priority: Priority,
        #[serde(default)]
        category: Option<String>,
    },
    AddSubtask {
        task: u64,
        text: String,
    },
    ToggleTask {
        task: u64,
    },
    ToggleSubtask {
        task: u64,
        subtask: u64,
    },
    DeleteTask {
        task: u64,
    },
    DeleteSubtask {
        task: u64,
        subtask: u64,
    },
}

impl Action {
    /// Apply this action to `list`.
    pub fn apply(&self, list: &mut TaskList) -> std::result::Result<(), Rejection> {
        match self {
            Action::AddTask { text, priority, category } => {
                let category = category.as_deref().unwrap_or(ALL_CATEGORIES);
                list.add_task(text, *priority, category).map(|_| ())
            }
            Action::AddSubtask { task, text } => list.add_subtask(*task, text).map(|_| ()),
            Action::ToggleTask { task } => list.toggle_task(*task).map(|_| ()),
            Action::ToggleSubtask { task, subtask } => {
                list.toggle_subtask(*task, *subtask).map(|_| ())
            }
            Action::DeleteTask { task } => list.delete_task(*task).map(|_| ()),
            Action::DeleteSubtask { task, subtask } => {
                list.delete_subtask(*task, *subtask).map(|_| ())
            }
        }
    }
}

/// A task as printed by `replay --json`, with its derived completion.
#[derive(Serialize)]
struct TaskView<'a> {
    #[serde(flatten)]
    task: &'a Task,
    completion: f64,
}

/// Parse a JSON action script.
pub fn parse_actions(input: &str) -> Result<Vec<Action>> {
    Ok(serde_json::from_str(input)?)
}

/// Apply every action in order, skipping rejected ones. Returns how many were rejected.
pub fn replay_actions(list: &mut TaskList, actions: &[Action]) -> usize {
    let mut rejected = 0;
    for (step, action) in actions.iter().enumerate() {
        if let Err(e) = action.apply(list) {
            warn!(step = step + 1, ?action, "action skipped: {e}");
            rejected += 1;
        }
    }
    rejected
}

/// Truncate a string to fit within the specified width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Format tasks and their subtasks as a plain-text table.
pub fn format_table(tasks: &[&Task]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<4} {:<7} {:<12} {:>5} {}",
        "ID", "Done", "Pri", "Category", "%", "Text"
    );
    for task in tasks {
        let _ = writeln!(
            out,
            "{:<5} {:<4} {:<7} {:<12} {:>4}% {}",
            task.id,
            if task.completed { "x" } else { "" },
            task.priority.label(),
            truncate(&task.category, 12),
            format!("{:.0}", completion_percentage(task)),
            task.text
        );
        for sub in &task.subtasks {
            let _ = writeln!(
                out,
                "{:<5} {:<4} {:<7} {:<12} {:>5}   {}.{} {}",
                "",
                if sub.completed { "x" } else { "" },
                "",
                "",
                "",
                task.id,
                sub.id,
                sub.text
            );
        }
    }
    out
}

/// Launch the terminal user interface.
pub fn cmd_ui(settings: &Settings) -> Result<()> {
    info!(theme = settings.theme.label(), category = %settings.category, "opening checklist");
    run_tui(settings)?;
    info!("checklist closed");
    Ok(())
}

/// Replay an action file against a fresh task list and print the outcome.
pub fn cmd_replay(input: &Path, json: bool, category: &str) -> Result<()> {
    let raw = fs::read_to_string(input)?;
    let actions = parse_actions(&raw)?;

    let mut list = TaskList::new();
    let rejected = replay_actions(&mut list, &actions);
    info!(
        applied = actions.len() - rejected,
        rejected,
        tasks = list.len(),
        "replay finished"
    );

    print!("{}", render_replay(&list, json, category)?);
    Ok(())
}

/// Format the tasks of `category` as the `replay` command prints them.
pub fn render_replay(list: &TaskList, json: bool, category: &str) -> Result<String> {
    let category = normalise_category(category);
    let visible = filter_by_category(list.tasks(), &category);
    if json {
        let views: Vec<TaskView> = visible
            .iter()
            .map(|&task| TaskView {
                task,
                completion: completion_percentage(task),
            })
            .collect();
        Ok(format!("{}\n", serde_json::to_string_pretty(&views)?))
    } else if visible.is_empty() {
        Ok("No tasks.\n".to_string())
    } else {
        Ok(format_table(&visible))
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "checklist", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"[
        {"action": "add_task", "text": "Buy milk", "priority": "medium", "category": "personal"},
        {"action": "add_subtask", "task": 1, "text": "Get 2% milk"},
        {"action": "toggle_subtask", "task": 1, "subtask": 1},
        {"action": "add_subtask", "task": 1, "text": "Get oat milk"},
        {"action": "add_task", "text": "Ship release"}
    ]"#;

    #[test]
    fn test_parse_actions() {
        let actions = parse_actions(SCRIPT).unwrap();
        assert_eq!(actions.len(), 5);
        assert_eq!(
            actions[4],
            Action::AddTask {
                text: "Ship release".to_string(),
                priority: Priority::Low,
                category: None,
            }
        );
    }

    #[test]
    fn test_parse_actions_rejects_unknown_action() {
        assert!(parse_actions(r#"[{"action": "rename_task", "task": 1}]"#).is_err());
    }

    #[test]
    fn test_replay_scenario() {
        let actions = parse_actions(SCRIPT).unwrap();
        let mut list = TaskList::new();
        assert_eq!(replay_actions(&mut list, &actions), 0);
        let milk = list.get(1).unwrap();
        assert_eq!(milk.category, "personal");
        assert_eq!(milk.completion_percentage(), 50.0);
        assert_eq!(list.get(2).unwrap().category, "all");
    }

    #[test]
    fn test_replay_skips_rejected_actions() {
        let actions = vec![
            Action::AddTask { text: "  ".to_string(), priority: Priority::High, category: None },
            Action::AddSubtask { task: 3, text: "nowhere".to_string() },
            Action::AddTask { text: "Real".to_string(), priority: Priority::High, category: None },
            Action::ToggleTask { task: 1 },
            Action::DeleteSubtask { task: 1, subtask: 1 },
        ];
        let mut list = TaskList::new();
        assert_eq!(replay_actions(&mut list, &actions), 3);
        assert_eq!(list.len(), 1);
        assert!(list.get(1).unwrap().completed);
    }

    #[test]
    fn test_format_table_lists_subtasks() {
        let mut list = TaskList::new();
        list.add_task("Buy milk", Priority::Medium, "personal").unwrap();
        list.add_subtask(1, "Get oat milk").unwrap();
        let tasks: Vec<&Task> = list.tasks().iter().collect();
        let table = format_table(&tasks);
        assert!(table.lines().nth(1).unwrap().contains("Buy milk"));
        assert!(table.lines().nth(1).unwrap().contains("Medium"));
        assert!(table.lines().nth(2).unwrap().contains("1.1 Get oat milk"));
    }

    fn replayed() -> TaskList {
        let mut list = TaskList::new();
        replay_actions(&mut list, &parse_actions(SCRIPT).unwrap());
        list
    }

    #[test]
    fn test_render_replay_filters_by_trimmed_category() {
        let table = render_replay(&replayed(), false, " personal ").unwrap();
        assert!(table.contains("Buy milk"));
        assert!(!table.contains("Ship release"));
    }

    #[test]
    fn test_render_replay_json_carries_completion() {
        let out = render_replay(&replayed(), true, "all").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let tasks = value.as_array().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0]["text"], "Buy milk");
        assert_eq!(tasks[0]["category"], "personal");
        assert_eq!(tasks[0]["completion"], 50.0);
        assert_eq!(tasks[0]["subtasks"].as_array().unwrap().len(), 2);
        assert_eq!(tasks[1]["completion"], 0.0);
    }

    #[test]
    fn test_render_replay_empty_category() {
        let out = render_replay(&replayed(), false, "work").unwrap();
        assert_eq!(out, "No tasks.\n");
        let json = render_replay(&replayed(), true, "work").unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("personal", 12), "personal");
        assert_eq!(truncate("housekeeping-long", 6), "house…");
    }
}
