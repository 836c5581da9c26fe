//! Enumerations for TUI state management.

/// Which view currently receives input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    TaskList,
    AddTask,
    AddSubtask,
    Help,
    Confirm,
}

/// A visible row of the task table: a task, or one of its subtasks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowRef {
    Task(u64),
    Subtask { task: u64, subtask: u64 },
}

impl RowRef {
    /// The task this row belongs to.
    pub fn task_id(self) -> u64 {
        match self {
            RowRef::Task(id) => id,
            RowRef::Subtask { task, .. } => task,
        }
    }
}
