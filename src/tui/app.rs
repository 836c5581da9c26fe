//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task list for the
//! lifetime of the screen, handles user input, renders the interface, and
//! coordinates between the list view and its dialogs (add task, add subtask,
//! confirm, help).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::{
    config::Settings,
    fields::{Priority, Theme, ALL_CATEGORIES},
    list::{filter_by_category, Rejection, TaskList},
    tui::{
        colors::{palette, priority_tint, Palette},
        enums::{AppState, RowRef},
        input::InputField,
        task_form::{
            SubtaskForm, TaskForm, CATEGORY_FIELD_ORDER, PRIORITY_FIELD_ORDER, TEXT_FIELD_ORDER,
        },
        utils::{centered_rect, cursor_column},
    },
};

/// Main application state for the terminal user interface.
///
/// Owns the `TaskList` for as long as the screen is mounted, plus the
/// presentation-only state: theme, active category filter, selection and forms.
pub struct App {
    state: AppState,
    list: TaskList,
    theme: Theme,
    category: String,
    table_state: TableState,
    rows: Vec<RowRef>,
    seen_revision: u64,
    task_form: TaskForm,
    subtask_form: SubtaskForm,
    confirm_target: Option<RowRef>,
    status_message: String,
}

fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

impl App {
    /// Mount a new, empty checklist screen.
    pub fn new(settings: &Settings) -> Self {
        let mut app = App {
            state: AppState::TaskList,
            list: TaskList::new(),
            theme: settings.theme,
            category: settings.category.clone(),
            table_state: TableState::default(),
            rows: Vec::new(),
            seen_revision: 0,
            task_form: TaskForm::new(),
            subtask_form: SubtaskForm::new(),
            confirm_target: None,
            status_message: String::new(),
        };
        app.update_rows();
        app
    }

    /// Rebuild the visible rows from the task list and the category filter.
    ///
    /// Keeps the selected row when it is still visible, otherwise keeps the
    /// selection index (clamped) so deleting a row lands on its neighbour.
    fn update_rows(&mut self) {
        let old_row = self.selected_row();
        let old_idx = self.table_state.selected();

        self.rows = filter_by_category(self.list.tasks(), &self.category)
            .into_iter()
            .flat_map(|task| {
                std::iter::once(RowRef::Task(task.id)).chain(task.subtasks.iter().map(
                    move |sub| RowRef::Subtask {
                        task: task.id,
                        subtask: sub.id,
                    },
                ))
            })
            .collect();
        self.seen_revision = self.list.revision();

        if self.rows.is_empty() {
            self.table_state.select(None);
            return;
        }
        let restored = old_row.and_then(|row| self.rows.iter().position(|&r| r == row));
        let idx = restored.unwrap_or_else(|| old_idx.unwrap_or(0).min(self.rows.len() - 1));
        self.table_state.select(Some(idx));
    }

    fn select_row(&mut self, row: RowRef) {
        if let Some(idx) = self.rows.iter().position(|&r| r == row) {
            self.table_state.select(Some(idx));
        }
    }

    fn selected_row(&self) -> Option<RowRef> {
        self.table_state
            .selected()
            .and_then(|idx| self.rows.get(idx))
            .copied()
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    fn select_previous(&mut self) {
        match self.table_state.selected() {
            Some(selected) if selected > 0 => self.table_state.select(Some(selected - 1)),
            None if !self.rows.is_empty() => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        match self.table_state.selected() {
            Some(selected) if selected + 1 < self.rows.len() => {
                self.table_state.select(Some(selected + 1))
            }
            None if !self.rows.is_empty() => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    /// Step the category filter through the presets and any custom categories.
    fn cycle_category(&mut self, forward: bool) {
        let mut categories = self.list.categories();
        if !categories.contains(&self.category) {
            categories.push(self.category.clone());
        }
        let n = categories.len();
        let current = categories
            .iter()
            .position(|c| c == &self.category)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % n
        } else {
            (current + n - 1) % n
        };
        self.category = categories[next].clone();
        debug!(category = %self.category, "category filter changed");
        self.update_rows();
        self.set_status_message(format!(
            "Category: {} ({} tasks)",
            self.category,
            filter_by_category(self.list.tasks(), &self.category).len()
        ));
    }

    fn toggle_selected(&mut self) {
        let result = match self.selected_row() {
            Some(RowRef::Task(id)) => self.list.toggle_task(id).map(|done| {
                if done {
                    "Task marked done"
                } else {
                    "Task reopened"
                }
            }),
            Some(RowRef::Subtask { task, subtask }) => {
                self.list.toggle_subtask(task, subtask).map(|done| {
                    if done {
                        "Subtask marked done"
                    } else {
                        "Subtask reopened"
                    }
                })
            }
            None => return,
        };
        match result {
            Ok(msg) => self.set_status_message(msg.to_string()),
            Err(e) => self.set_status_message(format!("Error: {}", e)),
        }
    }

    fn open_subtask_form(&mut self) {
        let Some(task_id) = self.selected_row().map(RowRef::task_id) else {
            self.set_status_message("Select a task first".to_string());
            return;
        };
        if let Some(task) = self.list.get(task_id) {
            self.subtask_form = SubtaskForm::for_parent(task.id, &task.text);
            self.state = AppState::AddSubtask;
        }
    }

    fn submit_task(&mut self) {
        let priority = self.task_form.selected_priority();
        let result = self
            .list
            .add_task(
                &self.task_form.text.value,
                priority,
                &self.task_form.category.value,
            )
            .map(|task| (task.id, task.text.clone()));

        match result {
            Ok((id, text)) => {
                self.task_form = TaskForm::new();
                // Show everything so the new task is on screen.
                self.category = ALL_CATEGORIES.to_string();
                self.state = AppState::TaskList;
                self.update_rows();
                self.select_row(RowRef::Task(id));
                self.set_status_message(format!("Added task #{}: {}", id, text));
            }
            Err(Rejection::BlankText) => {
                self.set_status_message("Task text is required".to_string());
            }
            Err(e) => self.set_status_message(format!("Error: {}", e)),
        }
    }

    fn submit_subtask(&mut self) {
        let Some(parent_id) = self.subtask_form.parent_id else {
            self.state = AppState::TaskList;
            self.set_status_message("No parent task selected".to_string());
            return;
        };
        let result = self
            .list
            .add_subtask(parent_id, &self.subtask_form.text.value)
            .map(|sub| sub.id);

        match result {
            Ok(subtask) => {
                let parent_text = std::mem::take(&mut self.subtask_form.parent_text);
                self.subtask_form = SubtaskForm::new();
                self.state = AppState::TaskList;
                self.update_rows();
                self.select_row(RowRef::Subtask {
                    task: parent_id,
                    subtask,
                });
                self.set_status_message(format!("Added subtask to '{}'", parent_text));
            }
            Err(Rejection::BlankText) => {
                self.set_status_message("Subtask text is required".to_string());
            }
            Err(e) => {
                self.state = AppState::TaskList;
                self.set_status_message(format!("Error: {}", e));
            }
        }
    }

    fn delete_confirmed(&mut self) {
        let result = match self.confirm_target.take() {
            Some(RowRef::Task(id)) => self
                .list
                .delete_task(id)
                .map(|task| format!("Deleted task '{}'", task.text)),
            Some(RowRef::Subtask { task, subtask }) => self
                .list
                .delete_subtask(task, subtask)
                .map(|sub| format!("Deleted subtask '{}'", sub.text)),
            None => return,
        };
        match result {
            Ok(msg) => self.set_status_message(msg),
            Err(e) => self.set_status_message(format!("Error: {}", e)),
        }
    }

    /// Handle keyboard input when in the task list view.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('a') => {
                self.task_form = TaskForm::with_category(&self.category);
                self.state = AppState::AddTask;
            }
            KeyCode::Char('s') => self.open_subtask_form(),
            KeyCode::Char('f') => self.cycle_category(true),
            KeyCode::Char('F') => self.cycle_category(false),
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
                self.set_status_message(format!("{} mode", self.theme.label()));
            }
            KeyCode::Char('d') => {
                if let Some(row) = self.selected_row() {
                    self.confirm_target = Some(row);
                    self.state = AppState::Confirm;
                }
            }
            KeyCode::Char('h') | KeyCode::F(1) => self.state = AppState::Help,
            _ => {}
        }
        false
    }

    fn handle_task_form_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.state = AppState::TaskList,
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Delete => self.task_form.handle_delete(),
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.task_form.handle_char(c),
            _ => {}
        }
    }

    fn handle_subtask_form_input(&mut self, key: KeyCode) {
        let field = &mut self.subtask_form.text;
        match key {
            KeyCode::Esc => self.state = AppState::TaskList,
            KeyCode::Left => field.move_cursor_left(),
            KeyCode::Right => field.move_cursor_right(),
            KeyCode::Home => field.move_cursor_home(),
            KeyCode::End => field.move_cursor_end(),
            KeyCode::Backspace => field.handle_backspace(),
            KeyCode::Delete => field.handle_delete(),
            KeyCode::Enter => self.submit_subtask(),
            KeyCode::Char(c) => field.handle_char(c),
            _ => {}
        }
    }

    fn handle_confirm_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.delete_confirmed();
                self.state = AppState::TaskList;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.confirm_target = None;
                self.state = AppState::TaskList;
            }
            _ => {}
        }
    }

    /// Apply one key press to the current view.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.clear_status_message();

        let should_quit = match self.state {
            AppState::TaskList => self.handle_task_list_input(key),
            AppState::AddTask => {
                self.handle_task_form_input(key);
                false
            }
            AppState::AddSubtask => {
                self.handle_subtask_form_input(key);
                false
            }
            AppState::Confirm => {
                self.handle_confirm_input(key);
                false
            }
            AppState::Help => {
                self.state = AppState::TaskList;
                false
            }
        };

        if self.list.revision() != self.seen_revision {
            self.update_rows();
        }
        should_quit
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key.code, key.modifiers));
                }
            }
        }
        Ok(false)
    }

    fn build_row(&self, row: RowRef, colors: Palette) -> Option<Row<'static>> {
        match row {
            RowRef::Task(id) => {
                let task = self.list.get(id)?;
                let mut style = Style::default()
                    .bg(priority_tint(task.priority, self.theme))
                    .fg(colors.on_tint);
                if task.completed {
                    style = style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
                }
                Some(
                    Row::new(vec![
                        Cell::from(checkbox(task.completed)),
                        Cell::from(task.text.clone()),
                        Cell::from(task.category.clone()),
                        Cell::from(task.priority.label()),
                        Cell::from(format!("{:.0}%", task.completion_percentage())),
                    ])
                    .style(style),
                )
            }
            RowRef::Subtask { task, subtask } => {
                let sub = self.list.get(task)?.subtask(subtask)?;
                let mut style = Style::default().fg(colors.foreground);
                if sub.completed {
                    style = style
                        .fg(colors.muted)
                        .add_modifier(Modifier::CROSSED_OUT);
                }
                Some(
                    Row::new(vec![
                        Cell::from(""),
                        Cell::from(format!("  ↳ {} {}", checkbox(sub.completed), sub.text)),
                        Cell::from(""),
                        Cell::from(""),
                        Cell::from(""),
                    ])
                    .style(style),
                )
            }
        }
    }

    /// Render the header and the task table.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let colors = palette(self.theme);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let header_text = vec![Line::from(vec![
            Span::styled(
                "CHECKLIST",
                Style::default()
                    .fg(colors.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(
                    "Category: {}  Theme: {}",
                    self.category,
                    self.theme.label()
                ),
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])];
        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, chunks[0]);

        let header_cells = ["", "Task", "Category", "Priority", "Done"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().fg(colors.accent))
            .height(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .filter_map(|&row| self.build_row(row, colors))
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(5),
        ];

        let visible = filter_by_category(self.list.tasks(), &self.category).len();
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Tasks ({}/{}) - Press 'h' for help",
                visible,
                self.list.len()
            )))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);

        if let Some(detail) = self.detail_line() {
            let strip = Paragraph::new(detail).style(Style::default().fg(colors.muted));
            f.render_widget(strip, chunks[2]);
        }
    }

    /// One-line summary of the task under the selection, subtask rows included.
    fn detail_line(&self) -> Option<String> {
        let task_id = match self.selected_row()? {
            RowRef::Task(id) => id,
            RowRef::Subtask { task, .. } => task,
        };
        let task = self.list.get(task_id)?;
        Some(format!(
            " #{} {} - created {} - {}/{} subtasks done",
            task.id,
            task.text,
            task.created_label(),
            task.completed_subtasks(),
            task.subtasks.len()
        ))
    }

    fn input_paragraph<'a>(field: &'a InputField, title: &'a str, colors: Palette) -> Paragraph<'a> {
        let border = if field.active {
            Style::default().fg(colors.accent)
        } else {
            Style::default().fg(colors.muted)
        };
        Paragraph::new(field.value.as_str())
            .style(Style::default().fg(colors.foreground))
            .block(Block::default().borders(Borders::ALL).title(title).border_style(border))
    }

    fn render_task_form(&mut self, f: &mut Frame, area: Rect) {
        let colors = palette(self.theme);
        let area = centered_rect(60, 60, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title("New Task")
            .borders(Borders::ALL)
            .style(Style::default().bg(colors.background).fg(colors.foreground));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(inner);

        let form = &self.task_form;
        f.render_widget(Self::input_paragraph(&form.text, "Task", colors), chunks[0]);

        let selected = form.selected_priority();
        let mut spans = Vec::new();
        for p in Priority::ALL {
            let style = if p == selected {
                Style::default()
                    .bg(priority_tint(p, self.theme))
                    .fg(colors.on_tint)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.muted)
            };
            spans.push(Span::styled(format!(" {} ", p.label()), style));
            spans.push(Span::raw(" "));
        }
        let priority_border = if form.current_field == PRIORITY_FIELD_ORDER {
            Style::default().fg(colors.accent)
        } else {
            Style::default().fg(colors.muted)
        };
        let selector = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Priority (←/→)")
                .border_style(priority_border),
        );
        f.render_widget(selector, chunks[1]);

        f.render_widget(
            Self::input_paragraph(&form.category, "Category", colors),
            chunks[2],
        );

        let hint = Paragraph::new("Tab/↑↓ move between fields  Enter add task  Esc cancel")
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[3]);

        let cursor_field = match form.current_field {
            TEXT_FIELD_ORDER => Some((chunks[0], &form.text)),
            CATEGORY_FIELD_ORDER => Some((chunks[2], &form.category)),
            _ => None,
        };
        if let Some((chunk, field)) = cursor_field {
            f.set_cursor_position((cursor_column(chunk, field.cursor), chunk.y + 1));
        }
    }

    fn render_subtask_form(&mut self, f: &mut Frame, area: Rect) {
        let colors = palette(self.theme);
        let area = centered_rect(60, 40, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title("Add Subtask")
            .borders(Borders::ALL)
            .style(Style::default().bg(colors.background).fg(colors.foreground));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        let form = &self.subtask_form;
        f.render_widget(
            Self::input_paragraph(&form.text, "Subtask", colors),
            chunks[0],
        );

        let parent = Paragraph::new(Line::from(vec![
            Span::styled("Parent task: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(form.parent_text.as_str()),
        ]));
        f.render_widget(parent, chunks[1]);

        let hint = Paragraph::new("Enter add subtask  Esc cancel")
            .style(Style::default().fg(colors.muted))
            .alignment(Alignment::Center);
        f.render_widget(hint, chunks[2]);

        f.set_cursor_position((cursor_column(chunks[0], form.text.cursor), chunks[0].y + 1));
    }

    /// Render the help screen with keyboard shortcuts.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let help_text = vec![
            Line::from(vec![Span::styled("Checklist Help", bold)]),
            Line::from(""),
            Line::from(vec![Span::styled("Task List:", bold)]),
            Line::from("  ↑/↓ k/j        Move selection"),
            Line::from("  Space/Enter    Toggle selected task or subtask"),
            Line::from("  a              Add task"),
            Line::from("  s              Add subtask to the selected task"),
            Line::from("  d              Delete selected task or subtask"),
            Line::from("  f / F          Next / previous category filter"),
            Line::from("  t              Toggle light/dark theme"),
            Line::from("  h/F1           Show this help"),
            Line::from("  q/Esc/Ctrl+C   Quit"),
            Line::from(""),
            Line::from(vec![Span::styled("Add Task Form:", bold)]),
            Line::from("  Tab/↑↓         Move between fields"),
            Line::from("  ←/→            Change priority"),
            Line::from("  Enter          Add task"),
            Line::from("  Esc            Cancel"),
            Line::from(""),
            Line::from("Tasks live in memory only and are gone when you quit."),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press any key to return"),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render a confirmation dialog for deletions.
    fn render_confirm(&mut self, f: &mut Frame, area: Rect) {
        let colors = palette(self.theme);
        let target = match self.confirm_target {
            Some(RowRef::Task(id)) => self
                .list
                .get(id)
                .map(|t| format!("Delete task '{}' and its subtasks", t.text)),
            Some(RowRef::Subtask { task, subtask }) => self
                .list
                .get(task)
                .and_then(|t| t.subtask(subtask))
                .map(|s| format!("Delete subtask '{}'", s.text)),
            None => None,
        }
        .unwrap_or_default();

        let block = Block::default()
            .title("Confirm Action")
            .borders(Borders::ALL)
            .style(
                Style::default()
                    .bg(priority_tint(Priority::High, self.theme))
                    .fg(colors.on_tint),
            );

        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Are you sure you want to:",
                Style::default().add_modifier(Modifier::BOLD),
            )]),
            Line::from(target),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let colors = palette(self.theme);
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::TaskList => format!(
                    "Tasks: {} | Category: {} | Press 'h' for help",
                    self.list.len(),
                    self.category
                ),
                AppState::AddTask => "Add New Task".to_string(),
                AppState::AddSubtask => "Add Subtask".to_string(),
                AppState::Help => "Help".to_string(),
                AppState::Confirm => "Confirm Action".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(colors.accent).fg(colors.background))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the view renderers.
    fn render(&mut self, f: &mut Frame) {
        let colors = palette(self.theme);
        f.render_widget(
            Block::default().style(Style::default().bg(colors.background).fg(colors.foreground)),
            f.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.state {
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::AddTask => {
                self.render_task_list(f, chunks[0]);
                self.render_task_form(f, chunks[0]);
            }
            AppState::AddSubtask => {
                self.render_task_list(f, chunks[0]);
                self.render_subtask_form(f, chunks[0]);
            }
            AppState::Help => self.render_help(f, chunks[0]),
            AppState::Confirm => {
                self.render_task_list(f, chunks[0]);
                self.render_confirm(f, chunks[0]);
            }
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
