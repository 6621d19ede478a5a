//! Task form handling for the terminal user interface.
//!
//! This module provides the `TaskForm` structure used by the add-task screen,
//! including field ordering, selector cycling, and the presence checks performed
//! before a task is handed to the store.

use chrono::NaiveDate;

use crate::{
    dates::parse_due_input,
    fields::{Priority, Status},
    task::{Assignee, NewTask, Progress},
    tui::input::InputField,
};

/// Global order constants for the add-task form fields.
pub const TITLE_GLOBAL_ORDER: usize = 0;
pub const DESCRIPTION_GLOBAL_ORDER: usize = 1;
pub const TAGS_GLOBAL_ORDER: usize = 2;
pub const DUE_GLOBAL_ORDER: usize = 3;
pub const ASSIGNEE_GLOBAL_ORDER: usize = 4;
pub const PRIORITY_GLOBAL_ORDER: usize = 5;
pub const STATUS_GLOBAL_ORDER: usize = 6;

const FIELD_COUNT: usize = 7;

/// Reasons a form cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Due date is required")]
    MissingDue,
    #[error("Unrecognised due date '{0}'")]
    InvalidDue(String),
}

/// Task form for entering a new task.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub tags: InputField,
    pub due: InputField,
    pub assignee: InputField,
    pub priority: usize,
    pub status: usize,
    pub current_field: usize,
    pub priorities: Vec<Priority>,
    pub statuses: Vec<Status>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    /// Create an empty form: medium priority, to-do, due today.
    pub fn new() -> Self {
        let priorities = Priority::ALL.to_vec();
        let statuses = Status::ALL.to_vec();
        let mut form = Self {
            title: InputField::new(),
            description: InputField::new(),
            tags: InputField::new(),
            due: InputField::with_value("today"),
            assignee: InputField::new(),
            priority: priorities.iter().position(|&p| p == Priority::Medium).unwrap_or(0),
            status: 0,
            current_field: TITLE_GLOBAL_ORDER,
            priorities,
            statuses,
        };
        form.update_active_field();
        form
    }

    /// Get mutable references to all text fields in visual order.
    pub fn fields_mut(&mut self) -> Vec<&mut InputField> {
        vec![
            &mut self.title,
            &mut self.description,
            &mut self.tags,
            &mut self.due,
            &mut self.assignee,
        ]
    }

    /// The text field at the current position, if the cursor is not on a selector.
    fn current_input(&mut self) -> Option<&mut InputField> {
        match self.current_field {
            TITLE_GLOBAL_ORDER => Some(&mut self.title),
            DESCRIPTION_GLOBAL_ORDER => Some(&mut self.description),
            TAGS_GLOBAL_ORDER => Some(&mut self.tags),
            DUE_GLOBAL_ORDER => Some(&mut self.due),
            ASSIGNEE_GLOBAL_ORDER => Some(&mut self.assignee),
            _ => None,
        }
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = (self.current_field + FIELD_COUNT - 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Update which field is currently active for editing.
    pub fn update_active_field(&mut self) {
        for field in self.fields_mut() {
            field.active = false;
        }
        if let Some(field) = self.current_input() {
            field.active = true;
        }
    }

    /// Handle character input for the currently active field.
    pub fn handle_char(&mut self, c: char) {
        if let Some(field) = self.current_input() {
            field.handle_char(c);
        }
    }

    /// Handle backspace input for the currently active field.
    pub fn handle_backspace(&mut self) {
        if let Some(field) = self.current_input() {
            field.handle_backspace();
        }
    }

    /// Handle delete input for the currently active field.
    pub fn handle_delete(&mut self) {
        if let Some(field) = self.current_input() {
            field.handle_delete();
        }
    }

    /// Handle left/right arrow keys for cursor movement or selector changes.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            PRIORITY_GLOBAL_ORDER => self.priority = step(self.priority, self.priorities.len(), right),
            STATUS_GLOBAL_ORDER => self.status = step(self.status, self.statuses.len(), right),
            _ => {
                if let Some(field) = self.current_input() {
                    if right {
                        field.move_cursor_right();
                    } else {
                        field.move_cursor_left();
                    }
                }
            }
        }
    }

    pub fn selected_priority(&self) -> Priority {
        self.priorities[self.priority]
    }

    pub fn selected_status(&self) -> Status {
        self.statuses[self.status]
    }

    /// Check required fields and build the store input.
    ///
    /// Tags are comma separated; blanks are dropped and order is kept. A task
    /// created as completed starts at 100% progress, anything else at 0%.
    pub fn to_new_task(&self, today: NaiveDate) -> Result<NewTask, FormError> {
        if self.title.trimmed().is_empty() {
            return Err(FormError::MissingTitle);
        }
        let due_text = self.due.trimmed();
        if due_text.is_empty() {
            return Err(FormError::MissingDue);
        }
        let due_date =
            parse_due_input(due_text, today).ok_or_else(|| FormError::InvalidDue(due_text.to_string()))?;

        let status = self.selected_status();
        let tags = self
            .tags
            .value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let assignee_name = match self.assignee.trimmed() {
            "" => "Unassigned",
            name => name,
        };

        Ok(NewTask {
            title: self.title.trimmed().to_string(),
            description: self.description.trimmed().to_string(),
            status,
            priority: self.selected_priority(),
            due_date,
            assignee: Assignee::new(assignee_name, ""),
            tags,
            progress: if status == Status::Completed { Progress::DONE } else { Progress::NONE },
        })
    }
}

/// Move a selector index one step, wrapping at both ends.
fn step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 6).unwrap()
    }

    fn type_str(form: &mut TaskForm, s: &str) {
        for c in s.chars() {
            form.handle_char(c);
        }
    }

    #[test]
    fn test_defaults() {
        let form = TaskForm::new();
        assert_eq!(form.selected_priority(), Priority::Medium);
        assert_eq!(form.selected_status(), Status::Todo);
        assert!(form.title.active);
        assert!(!form.due.active);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = TaskForm::new();
        form.prev_field();
        assert_eq!(form.current_field, STATUS_GLOBAL_ORDER);
        form.next_field();
        assert_eq!(form.current_field, TITLE_GLOBAL_ORDER);
        form.next_field();
        assert!(form.description.active);
        assert!(!form.title.active);
    }

    #[test]
    fn test_selectors_cycle() {
        let mut form = TaskForm::new();
        form.current_field = PRIORITY_GLOBAL_ORDER;
        form.handle_left_right(true);
        assert_eq!(form.selected_priority(), Priority::High);
        form.handle_left_right(true);
        assert_eq!(form.selected_priority(), Priority::Low);
        form.current_field = STATUS_GLOBAL_ORDER;
        form.handle_left_right(false);
        assert_eq!(form.selected_status(), Status::Completed);
        // Typing on a selector is ignored.
        form.handle_char('x');
        assert_eq!(form.title.value, "");
    }

    #[test]
    fn test_title_is_required() {
        let mut form = TaskForm::new();
        type_str(&mut form, "   ");
        assert_eq!(form.to_new_task(today()), Err(FormError::MissingTitle));
    }

    #[test]
    fn test_due_must_parse() {
        let mut form = TaskForm::new();
        type_str(&mut form, "Plan");
        form.due.clear();
        assert_eq!(form.to_new_task(today()), Err(FormError::MissingDue));
        form.due = InputField::with_value("someday");
        assert_eq!(form.to_new_task(today()), Err(FormError::InvalidDue("someday".into())));
    }

    #[test]
    fn test_builds_new_task() {
        let mut form = TaskForm::new();
        type_str(&mut form, " Write release notes ");
        form.next_field();
        type_str(&mut form, "for 1.0");
        form.next_field();
        type_str(&mut form, "docs, ,release");
        form.next_field();
        form.due.clear();
        type_str(&mut form, "in 3d");
        form.current_field = STATUS_GLOBAL_ORDER;
        form.handle_left_right(false);

        let task = form.to_new_task(today()).unwrap();
        assert_eq!(task.title, "Write release notes");
        assert_eq!(task.description, "for 1.0");
        assert_eq!(task.tags, vec!["docs".to_string(), "release".to_string()]);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 11, 9).unwrap());
        assert_eq!(task.assignee.name, "Unassigned");
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.progress, Progress::DONE);
    }
}
