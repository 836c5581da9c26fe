//! Form state for adding tasks and subtasks in the TUI.
//!
//! The task form has three fields in visual order: the task text, a priority
//! selector and a free-text category. The subtask form has a single text field
//! and remembers which task it targets.

use crate::{
    fields::{normalise_category, Priority, ALL_CATEGORIES},
    tui::input::InputField,
};

/// Field order for the add-task form.
pub const TEXT_FIELD_ORDER: usize = 0;
pub const PRIORITY_FIELD_ORDER: usize = 1;
pub const CATEGORY_FIELD_ORDER: usize = 2;

const FIELD_COUNT: usize = 3;

/// Add-task form.
pub struct TaskForm {
    pub text: InputField,
    pub category: InputField,
    pub priority: usize,
    pub current_field: usize,
}

impl TaskForm {
    /// A fresh form: priority low, category "all".
    pub fn new() -> Self {
        Self::with_category(ALL_CATEGORIES)
    }

    /// A fresh form whose category starts at `category`, normally the active filter.
    pub fn with_category(category: &str) -> Self {
        let mut form = Self {
            text: InputField::new(),
            category: InputField::with_value(&normalise_category(category)),
            priority: 0,
            current_field: TEXT_FIELD_ORDER,
        };
        form.update_active_field();
        form
    }

    pub fn selected_priority(&self) -> Priority {
        Priority::ALL[self.priority % Priority::ALL.len()]
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            FIELD_COUNT - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    pub fn update_active_field(&mut self) {
        self.text.active = self.current_field == TEXT_FIELD_ORDER;
        self.category.active = self.current_field == CATEGORY_FIELD_ORDER;
    }

    fn active_input(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            TEXT_FIELD_ORDER => Some(&mut self.text),
            CATEGORY_FIELD_ORDER => Some(&mut self.category),
            _ => None,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            field.handle_char(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_backspace();
        }
    }

    pub fn handle_delete(&mut self) {
        if let Some(field) = self.active_input() {
            field.handle_delete();
        }
    }

    /// Left/right move the cursor in text fields and cycle the priority selector.
    pub fn handle_left_right(&mut self, right: bool) {
        if self.current_field == PRIORITY_FIELD_ORDER {
            let n = Priority::ALL.len();
            self.priority = if right {
                (self.priority + 1) % n
            } else {
                (self.priority + n - 1) % n
            };
        } else if let Some(field) = self.active_input() {
            if right {
                field.move_cursor_right();
            } else {
                field.move_cursor_left();
            }
        }
    }
}

/// Add-subtask dialog, bound to one parent task.
pub struct SubtaskForm {
    pub text: InputField,
    pub parent_id: Option<u64>,
    pub parent_text: String,
}

impl SubtaskForm {
    pub fn new() -> Self {
        Self {
            text: InputField::new(),
            parent_id: None,
            parent_text: String::new(),
        }
    }

    pub fn for_parent(parent_id: u64, parent_text: &str) -> Self {
        let mut text = InputField::new();
        text.active = true;
        Self {
            text,
            parent_id: Some(parent_id),
            parent_text: parent_text.to_string(),
        }
    }
}
