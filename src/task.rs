//! Task and subtask data structures.
//!
//! This module defines the `Task` struct, a top-level checklist item that owns an
//! ordered sequence of `Subtask`s, and the derived completion metric.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::fields::{Priority, ALL_CATEGORIES};

/// A checklist item with priority, category and owned subtasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    pub created_at_utc: i64,
}

/// A child item of exactly one task. Subtasks have no children of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Task {
    /// Look up a subtask by its id within this task.
    pub fn subtask(&self, subtask_id: u64) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| s.id == subtask_id)
    }

    pub fn subtask_mut(&mut self, subtask_id: u64) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| s.id == subtask_id)
    }

    /// Next subtask id, unique among this task's current subtasks.
    pub fn next_subtask_id(&self) -> u64 {
        self.subtasks.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Creation time for display, e.g. `2024-05-01 09:30 UTC`.
    pub fn created_label(&self) -> String {
        match DateTime::from_timestamp(self.created_at_utc, 0) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
            None => "-".to_string(),
        }
    }

    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.completed).count()
    }

    /// Share of completed subtasks, in percent. Zero when there are none.
    pub fn completion_percentage(&self) -> f64 {
        if self.subtasks.is_empty() {
            return 0.0;
        }
        100.0 * self.completed_subtasks() as f64 / self.subtasks.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with(flags: &[bool]) -> Task {
        Task {
            id: 1,
            text: "Pack".to_string(),
            completed: false,
            priority: Priority::Low,
            category: "all".to_string(),
            subtasks: flags
                .iter()
                .enumerate()
                .map(|(i, &completed)| Subtask {
                    id: i as u64 + 1,
                    text: format!("item {}", i + 1),
                    completed,
                })
                .collect(),
            created_at_utc: 0,
        }
    }

    #[test]
    fn test_completion_without_subtasks_is_zero() {
        assert_eq!(task_with(&[]).completion_percentage(), 0.0);
    }

    #[test]
    fn test_completion_one_of_three() {
        let pct = task_with(&[true, false, false]).completion_percentage();
        assert!((pct - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.0}", pct), "33");
    }

    #[test]
    fn test_completion_all_done() {
        assert_eq!(task_with(&[true, true]).completion_percentage(), 100.0);
    }

    #[test]
    fn test_next_subtask_id_follows_max() {
        let mut task = task_with(&[false, false]);
        assert_eq!(task.next_subtask_id(), 3);
        task.subtasks.remove(0);
        assert_eq!(task.next_subtask_id(), 3);
    }

    #[test]
    fn test_created_label() {
        let mut task = task_with(&[]);
        assert_eq!(task.created_label(), "1970-01-01 00:00 UTC");
        task.created_at_utc = 1_714_555_800;
        assert_eq!(task.created_label(), "2024-05-01 09:30 UTC");
        task.created_at_utc = i64::MAX;
        assert_eq!(task.created_label(), "-");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let task: Task =
            serde_json::from_str(r#"{"id":4,"text":"Call mum","created_at_utc":0}"#).unwrap();
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.category, "all");
        assert!(task.subtasks.is_empty());
    }
}
