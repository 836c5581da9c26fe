//! The task list controller.
//!
//! `TaskList` is the sole owner of every `Task` and `Subtask` for the lifetime of
//! a screen. The presentation layer reads it and calls its operations; each
//! operation either applies one full mutation or is rejected without touching
//! state. Applied mutations bump a revision counter so observers can tell that
//! something changed without diffing the task sequence.

use thiserror::Error;
use tracing::debug;

use crate::fields::{normalise_category, Priority, ALL_CATEGORIES, PRESET_CATEGORIES};
use crate::task::{Subtask, Task};

/// Reasons an operation was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("text cannot be blank")]
    BlankText,
    #[error("task #{0} not found")]
    UnknownTask(u64),
    #[error("subtask #{subtask} not found in task #{task}")]
    UnknownSubtask { task: u64, subtask: u64 },
}

/// In-memory, ordered collection of tasks with well-defined mutations.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
    revision: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of mutations applied so far. Rejected operations leave it unchanged.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Task, Rejection> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Rejection::UnknownTask(id))
    }

    /// Create a task and append it to the end of the list.
    pub fn add_task(
        &mut self,
        text: &str,
        priority: Priority,
        category: &str,
    ) -> Result<&Task, Rejection> {
        // Stored trimmed so rows and the replay table never carry stray whitespace.
        let text = text.trim();
        if text.is_empty() {
            debug!("rejected task with blank text");
            return Err(Rejection::BlankText);
        }

        self.next_id += 1;
        let task = Task {
            id: self.next_id,
            text: text.to_string(),
            completed: false,
            priority,
            category: normalise_category(category),
            subtasks: Vec::new(),
            created_at_utc: chrono::Utc::now().timestamp(),
        };
        debug!(task_id = task.id, %priority, category = %task.category, "task added");

        self.revision += 1;
        let idx = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[idx])
    }

    /// Append a subtask to the task with `parent_id`. Other tasks are untouched.
    pub fn add_subtask(&mut self, parent_id: u64, text: &str) -> Result<&Subtask, Rejection> {
        let text = text.trim();
        if text.is_empty() {
            debug!(parent_id, "rejected subtask with blank text");
            return Err(Rejection::BlankText);
        }

        // Borrow the field directly so the revision can be bumped alongside.
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == parent_id)
            .ok_or(Rejection::UnknownTask(parent_id))?;
        let subtask = Subtask {
            id: task.next_subtask_id(),
            text: text.to_string(),
            completed: false,
        };
        debug!(parent_id, subtask_id = subtask.id, "subtask added");
        task.subtasks.push(subtask);

        self.revision += 1;
        Ok(&task.subtasks[task.subtasks.len() - 1])
    }

    /// Flip a task's completion flag and return the new value.
    /// Subtasks keep their own flags.
    pub fn toggle_task(&mut self, task_id: u64) -> Result<bool, Rejection> {
        let task = self.get_mut(task_id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        debug!(task_id, completed, "task toggled");
        self.revision += 1;
        Ok(completed)
    }

    /// Flip a subtask's completion flag and return the new value.
    /// The parent's own flag is not derived from its subtasks.
    pub fn toggle_subtask(&mut self, task_id: u64, subtask_id: u64) -> Result<bool, Rejection> {
        let task = self.get_mut(task_id)?;
        let subtask = task.subtask_mut(subtask_id).ok_or(Rejection::UnknownSubtask {
            task: task_id,
            subtask: subtask_id,
        })?;
        subtask.completed = !subtask.completed;
        let completed = subtask.completed;
        debug!(task_id, subtask_id, completed, "subtask toggled");
        self.revision += 1;
        Ok(completed)
    }

    /// Remove a task and all of its subtasks. Its id is not handed out again.
    pub fn delete_task(&mut self, task_id: u64) -> Result<Task, Rejection> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or(Rejection::UnknownTask(task_id))?;
        let task = self.tasks.remove(idx);
        debug!(task_id, subtasks = task.subtasks.len(), "task deleted");
        self.revision += 1;
        Ok(task)
    }

    pub fn delete_subtask(&mut self, task_id: u64, subtask_id: u64) -> Result<Subtask, Rejection> {
        let task = self.get_mut(task_id)?;
        let idx = task
            .subtasks
            .iter()
            .position(|s| s.id == subtask_id)
            .ok_or(Rejection::UnknownSubtask {
                task: task_id,
                subtask: subtask_id,
            })?;
        let subtask = task.subtasks.remove(idx);
        debug!(task_id, subtask_id, "subtask deleted");
        self.revision += 1;
        Ok(subtask)
    }

    /// Categories the filter can offer: presets first, then any other category
    /// used by a task, each once, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = PRESET_CATEGORIES.iter().map(|c| c.to_string()).collect();
        for task in &self.tasks {
            if !out.iter().any(|c| c == &task.category) {
                out.push(task.category.clone());
            }
        }
        out
    }
}

/// Derived completion metric for a task. See [`Task::completion_percentage`].
pub fn completion_percentage(task: &Task) -> f64 {
    task.completion_percentage()
}

/// Read-only projection of `tasks` onto one category. `"all"` keeps everything.
pub fn filter_by_category<'a>(tasks: &'a [Task], category: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| category == ALL_CATEGORIES || t.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add_task("Write report", Priority::High, "work").unwrap();
        list.add_task("Buy milk", Priority::Medium, "personal").unwrap();
        list.add_task("Plan sprint", Priority::Low, "work").unwrap();
        list
    }

    #[test]
    fn test_add_task_appends_with_defaults() {
        let mut list = TaskList::new();
        let task = list.add_task("Water plants", Priority::Low, "all").unwrap();
        assert_eq!(task.text, "Water plants");
        assert!(!task.completed);
        assert!(task.subtasks.is_empty());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_task_rejects_blank_text() {
        let mut list = TaskList::new();
        assert_eq!(list.add_task("", Priority::Low, "all"), Err(Rejection::BlankText));
        assert_eq!(list.add_task("   ", Priority::High, "work"), Err(Rejection::BlankText));
        assert!(list.is_empty());
        assert_eq!(list.revision(), 0);
    }

    #[test]
    fn test_add_task_trims_text_and_defaults_category() {
        let mut list = TaskList::new();
        let task = list.add_task("  Stretch  ", Priority::Low, " ").unwrap();
        assert_eq!(task.text, "Stretch");
        assert_eq!(task.category, "all");
    }

    #[test]
    fn test_task_ids_are_unique_and_not_reused() {
        let mut list = sample();
        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        list.delete_task(3).unwrap();
        let id = list.add_task("Review PR", Priority::Low, "work").unwrap().id;
        assert_eq!(id, 4);
    }

    #[test]
    fn test_add_subtask_to_unknown_parent_changes_nothing() {
        let mut list = sample();
        let before: Vec<Task> = list.tasks().to_vec();
        let revision = list.revision();
        assert_eq!(list.add_subtask(42, "Orphan"), Err(Rejection::UnknownTask(42)));
        assert_eq!(list.tasks(), &before[..]);
        assert_eq!(list.revision(), revision);
    }

    #[test]
    fn test_add_subtask_only_touches_parent() {
        let mut list = sample();
        let others: Vec<Task> = list.tasks().iter().filter(|t| t.id != 2).cloned().collect();
        let sub = list.add_subtask(2, "Get oat milk").unwrap();
        assert_eq!(sub.id, 1);
        assert!(!sub.completed);
        let after: Vec<Task> = list.tasks().iter().filter(|t| t.id != 2).cloned().collect();
        assert_eq!(after, others);
        assert_eq!(list.get(2).unwrap().subtasks.len(), 1);
    }

    #[test]
    fn test_add_subtask_rejects_blank_text() {
        let mut list = sample();
        assert_eq!(list.add_subtask(1, " \t"), Err(Rejection::BlankText));
        assert!(list.get(1).unwrap().subtasks.is_empty());
    }

    #[test]
    fn test_subtasks_keep_insertion_order() {
        let mut list = sample();
        for text in ["one", "two", "three"] {
            list.add_subtask(1, text).unwrap();
        }
        let texts: Vec<&str> = list.get(1).unwrap().subtasks.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_toggle_task_is_involution() {
        let mut list = sample();
        assert_eq!(list.toggle_task(1), Ok(true));
        assert_eq!(list.toggle_task(1), Ok(false));
        assert!(!list.get(1).unwrap().completed);
    }

    #[test]
    fn test_toggle_task_does_not_cascade() {
        let mut list = sample();
        list.add_subtask(1, "Outline").unwrap();
        list.toggle_task(1).unwrap();
        assert!(!list.get(1).unwrap().subtasks[0].completed);
    }

    #[test]
    fn test_toggle_unknown_ids() {
        let mut list = sample();
        list.add_subtask(1, "Outline").unwrap();
        assert_eq!(list.toggle_task(9), Err(Rejection::UnknownTask(9)));
        assert_eq!(list.toggle_subtask(9, 1), Err(Rejection::UnknownTask(9)));
        assert_eq!(
            list.toggle_subtask(1, 7),
            Err(Rejection::UnknownSubtask { task: 1, subtask: 7 })
        );
    }

    #[test]
    fn test_toggle_subtask_does_not_complete_parent() {
        let mut list = sample();
        list.add_subtask(1, "Outline").unwrap();
        assert_eq!(list.toggle_subtask(1, 1), Ok(true));
        let task = list.get(1).unwrap();
        assert!(!task.completed);
        assert_eq!(completion_percentage(task), 100.0);
    }

    #[test]
    fn test_filter_by_category() {
        let list = sample();
        let snapshot = list.tasks().to_vec();
        let work: Vec<&str> = filter_by_category(list.tasks(), "work")
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(work, vec!["Write report", "Plan sprint"]);
        assert_eq!(filter_by_category(list.tasks(), "all").len(), 3);
        assert!(filter_by_category(list.tasks(), "garden").is_empty());
        assert_eq!(list.tasks(), &snapshot[..]);
    }

    #[test]
    fn test_revision_tracks_applied_mutations() {
        let mut list = TaskList::new();
        list.add_task("A", Priority::Low, "all").unwrap();
        list.add_subtask(1, "a1").unwrap();
        list.toggle_task(1).unwrap();
        list.toggle_subtask(1, 1).unwrap();
        let _ = list.toggle_subtask(1, 5);
        let _ = list.add_task("", Priority::Low, "all");
        assert_eq!(list.revision(), 4);
    }

    #[test]
    fn test_delete_subtask() {
        let mut list = sample();
        list.add_subtask(2, "Get 2% milk").unwrap();
        list.add_subtask(2, "Get oat milk").unwrap();
        let removed = list.delete_subtask(2, 1).unwrap();
        assert_eq!(removed.text, "Get 2% milk");
        assert_eq!(list.get(2).unwrap().subtasks.len(), 1);
        assert_eq!(
            list.delete_subtask(2, 1),
            Err(Rejection::UnknownSubtask { task: 2, subtask: 1 })
        );
    }

    #[test]
    fn test_categories_presets_then_custom() {
        let mut list = sample();
        list.add_task("Repot fern", Priority::Low, "garden").unwrap();
        list.add_task("Weed beds", Priority::Low, "garden").unwrap();
        assert_eq!(list.categories(), vec!["all", "work", "personal", "garden"]);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut list = TaskList::new();
        let id = list.add_task("Buy milk", Priority::Medium, "personal").unwrap().id;
        let sub = list.add_subtask(id, "Get 2% milk").unwrap().id;
        list.toggle_subtask(id, sub).unwrap();
        assert_eq!(completion_percentage(list.get(id).unwrap()), 100.0);
        list.add_subtask(id, "Get oat milk").unwrap();
        assert_eq!(completion_percentage(list.get(id).unwrap()), 50.0);
    }
}
