//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store and the active
//! view criteria, handles key presses, and renders the board: stats, filter bar,
//! project sidebar, task table, add-task form and help screen.

use std::io;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::{
    dates::{format_due_relative, format_due_short},
    fields::*,
    stats::{compute_stats, is_overdue, TaskStats},
    store::TaskStore,
    task::{Project, Task, TaskId},
    tui::{
        colors::{priority_color, project_color, status_color, DARK_RED, GOLD, PURPLE},
        enums::{AppState, InputMode},
        input::InputField,
        task_form::{
            TaskForm, ASSIGNEE_GLOBAL_ORDER, DESCRIPTION_GLOBAL_ORDER, DUE_GLOBAL_ORDER,
            PRIORITY_GLOBAL_ORDER, STATUS_GLOBAL_ORDER, TAGS_GLOBAL_ORDER, TITLE_GLOBAL_ORDER,
        },
        utils::{centered_rect, cursor_column},
    },
    view::{derive_view, ViewQuery},
};

/// Main application state for the terminal user interface.
///
/// Holds the store, the view criteria and the ids of the currently visible
/// tasks. The visible list is always rebuilt from the store, never edited.
pub struct App {
    state: AppState,
    store: TaskStore,
    query: ViewQuery,
    projects: Vec<Project>,
    selected_project: Option<usize>,
    task_list_state: TableState,
    visible: Vec<TaskId>,
    task_form: TaskForm,
    search: InputField,
    input_mode: InputMode,
    status_message: String,
    now: DateTime<Utc>,
}

impl App {
    /// Create a new App over `store`, starting from `query`.
    pub fn new(store: TaskStore, query: ViewQuery, projects: Vec<Project>, now: DateTime<Utc>) -> Self {
        let search = InputField::with_value(&query.search);
        let mut app = App {
            state: AppState::TaskList,
            store,
            query,
            projects,
            selected_project: None,
            task_list_state: TableState::default(),
            visible: Vec::new(),
            task_form: TaskForm::new(),
            search,
            input_mode: InputMode::None,
            status_message: String::new(),
            now,
        };
        app.update_visible_tasks();
        app
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Ids of the tasks currently shown, in display order.
    pub fn visible_ids(&self) -> &[TaskId] {
        &self.visible
    }

    /// Advance the clock used for overdue markers and relative dates.
    pub fn set_now(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    /// The calendar day the user is in, for form input and relative labels.
    /// Overdue checks keep using the UTC instant.
    fn today(&self) -> NaiveDate {
        self.now.with_timezone(&Local).date_naive()
    }

    /// Stats over the whole store at the current instant.
    pub fn stats(&self) -> TaskStats {
        compute_stats(self.store.tasks(), self.now)
    }

    /// Rebuild the visible list from the store and criteria.
    ///
    /// Attempts to keep the selected task selected when it is still visible.
    fn update_visible_tasks(&mut self) {
        let old_selected_id = self.selected_id();

        self.visible = derive_view(self.store.tasks(), &self.query)
            .into_iter()
            .map(|t| t.id)
            .collect();

        let new_idx = old_selected_id
            .and_then(|id| self.visible.iter().position(|&v| v == id))
            .or(if self.visible.is_empty() { None } else { Some(0) });
        self.task_list_state.select(new_idx);
    }

    /// Id of the highlighted row, if any.
    pub fn selected_id(&self) -> Option<TaskId> {
        self.task_list_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .copied()
    }

    fn selected_task(&self) -> Option<&Task> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Flip the completion state of the highlighted task.
    fn toggle_selected_completion(&mut self) {
        let Some(id) = self.selected_id() else {
            self.set_status_message("No task selected".to_string());
            return;
        };
        let completed = !self.selected_task().is_some_and(Task::is_completed);
        match self.store.set_completion(id, completed) {
            Ok(task) => {
                let msg = if completed {
                    format!("Completed '{}'", task.title)
                } else {
                    format!("Reopened '{}'", task.title)
                };
                self.set_status_message(msg);
            }
            // The row may point at a task that no longer exists; nothing to do.
            Err(e) => debug!(error = %e, "completion toggle ignored"),
        }
        self.update_visible_tasks();
    }

    fn move_selection(&mut self, down: bool) {
        if self.visible.is_empty() {
            self.task_list_state.select(None);
            return;
        }
        let next = match self.task_list_state.selected() {
            Some(i) if down => (i + 1).min(self.visible.len() - 1),
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.task_list_state.select(Some(next));
    }

    /// Handle keyboard input while typing a search query.
    fn handle_search_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.search.clear();
                self.input_mode = InputMode::None;
                self.query.set_search("");
                self.update_visible_tasks();
                self.clear_status_message();
                return;
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::None;
                if self.query.search.is_empty() {
                    self.set_status_message("Search cleared".to_string());
                } else {
                    self.set_status_message(format!(
                        "Search applied: '{}' ({} tasks)",
                        self.query.search,
                        self.visible.len()
                    ));
                }
                return;
            }
            KeyCode::Backspace => self.search.handle_backspace(),
            KeyCode::Delete => self.search.handle_delete(),
            KeyCode::Left => self.search.move_cursor_left(),
            KeyCode::Right => self.search.move_cursor_right(),
            KeyCode::Char(c) => self.search.handle_char(c),
            _ => return,
        }
        self.query.set_search(self.search.value.clone());
        self.update_visible_tasks();
    }

    /// Handle keyboard input when in the task list view.
    ///
    /// Returns true if the application should quit.
    fn handle_task_list_input(&mut self, key: KeyCode) -> bool {
        if self.input_mode == InputMode::Search {
            self.handle_search_input(key);
            return false;
        }

        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.query.search.is_empty() {
                    return true;
                }
                self.search.clear();
                self.query.set_search("");
                self.update_visible_tasks();
                self.set_status_message("Search cleared".to_string());
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Enter => self.toggle_selected_completion(),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.set_status_message(
                    "Search: type to filter title/description/tags, Enter to apply, Esc to cancel".to_string(),
                );
            }
            KeyCode::Char('s') => {
                self.query.set_status_filter(self.query.status.cycle(&Status::ALL));
                self.update_visible_tasks();
                self.set_status_message(format!("Status filter: {}", self.query.status));
            }
            KeyCode::Char('p') => {
                self.query.set_priority_filter(self.query.priority.cycle(&Priority::ALL));
                self.update_visible_tasks();
                self.set_status_message(format!("Priority filter: {}", self.query.priority));
            }
            KeyCode::Char('o') => {
                self.query.set_sort(self.query.sort.next());
                self.update_visible_tasks();
                self.set_status_message(format!("Sorted by {}", format_sort_key(self.query.sort)));
            }
            KeyCode::Tab => {
                // Sidebar selection is cosmetic: tasks carry no project.
                self.selected_project = match self.selected_project {
                    None if !self.projects.is_empty() => Some(0),
                    Some(i) if i + 1 < self.projects.len() => Some(i + 1),
                    _ => None,
                };
            }
            KeyCode::Char('a') => {
                self.task_form = TaskForm::new();
                self.state = AppState::AddTask;
                self.input_mode = InputMode::Form;
            }
            KeyCode::Char('h') | KeyCode::F(1) => {
                self.state = AppState::Help;
            }
            _ => {}
        }
        false
    }

    /// Handle keyboard input in the add-task form.
    fn handle_form_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => {
                self.state = AppState::TaskList;
                self.input_mode = InputMode::None;
                self.set_status_message("Cancelled".to_string());
            }
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Delete => self.task_form.handle_delete(),
            KeyCode::Enter => self.create_task(),
            KeyCode::Char(c) => self.task_form.handle_char(c),
            _ => {}
        }
        false
    }

    /// Hand the form contents to the store, or report what is missing.
    fn create_task(&mut self) {
        match self.task_form.to_new_task(self.today()) {
            Ok(input) => {
                let task = self.store.add_task(input);
                let (id, title) = (task.id, task.title.clone());
                self.state = AppState::TaskList;
                self.input_mode = InputMode::None;
                self.update_visible_tasks();
                if let Some(idx) = self.visible.iter().position(|&v| v == id) {
                    self.task_list_state.select(Some(idx));
                    self.set_status_message(format!("Task created: {}", title));
                } else {
                    self.set_status_message(format!("Task created: {} (hidden by filters)", title));
                }
            }
            Err(e) => self.set_status_message(e.to_string()),
        }
    }

    fn handle_help_input(&mut self, key: KeyCode) -> bool {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::F(1)) {
            self.state = AppState::TaskList;
        }
        false
    }

    /// Dispatch a key press according to the current screen.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.clear_status_message();
        match self.state {
            AppState::TaskList => self.handle_task_list_input(key.code),
            AppState::AddTask => self.handle_form_input(key.code),
            AppState::Help => self.handle_help_input(key.code),
        }
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key));
            }
        }
        Ok(false)
    }

    /// Render the header with title and completion gauge.
    fn render_header(&self, f: &mut Frame, area: Rect, stats: &TaskStats) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(30)])
            .split(area);

        let header_text = Line::from(vec![
            Span::styled("TASKFLOW", Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled("My Tasks", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                "Manage and organize your daily tasks",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ]);
        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        f.render_widget(header, chunks[0]);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Done"))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(stats.completion_percent());
        f.render_widget(gauge, chunks[1]);
    }

    /// Render the four stat cards.
    fn render_stats(&self, f: &mut Frame, area: Rect, stats: &TaskStats) {
        let cards = [
            ("Total Tasks", stats.total, Color::Blue),
            ("Completed", stats.completed, Color::Green),
            ("In Progress", stats.in_progress, Color::Magenta),
            ("Overdue", stats.overdue, Color::Red),
        ];
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        for ((label, value, color), chunk) in cards.iter().zip(chunks.iter()) {
            let card = Paragraph::new(Line::from(vec![
                Span::raw(format!("{}: ", label)),
                Span::styled(value.to_string(), Style::default().fg(*color).add_modifier(Modifier::BOLD)),
            ]))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
            f.render_widget(card, *chunk);
        }
    }

    /// Render the search box and filter selectors.
    fn render_filter_bar(&self, f: &mut Frame, area: Rect) {
        let searching = self.input_mode == InputMode::Search;
        let search_style = if searching { Style::default().fg(GOLD) } else { Style::default() };
        let search_text = if self.search.value.is_empty() && !searching {
            Span::styled("Search tasks...", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.search.value.clone())
        };

        let line = Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::DarkGray)),
            search_text,
            Span::raw("   "),
            Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(filter_label(self.query.status, format_status)),
            Span::raw("   "),
            Span::styled("Priority: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(filter_label(self.query.priority, format_priority)),
            Span::raw("   "),
            Span::styled("Sort: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format_sort_key(self.query.sort)),
        ]);
        let bar = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filters")
                .border_style(search_style),
        );
        f.render_widget(bar, area);

        if searching {
            f.set_cursor_position((cursor_column(area, 3, self.search.cursor), area.y + 1));
        }
    }

    /// Render the project sidebar.
    fn render_sidebar(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            if self.selected_project.is_none() { "> All Projects" } else { "  All Projects" },
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for (i, project) in self.projects.iter().enumerate() {
            let marker = if self.selected_project == Some(i) { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled("● ", Style::default().fg(project_color(&project.color_tag))),
                Span::raw(project.name.clone()),
                Span::styled(format!(" {}", project.task_count), Style::default().fg(Color::DarkGray)),
            ]));
        }
        let sidebar = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Projects"))
            .wrap(Wrap { trim: true });
        f.render_widget(sidebar, area);
    }

    /// Render the task table.
    fn render_task_table(&mut self, f: &mut Frame, area: Rect) {
        let today = self.today();
        let now = self.now;

        if self.visible.is_empty() {
            let empty = Paragraph::new("No tasks found")
                .block(Block::default().borders(Borders::ALL).title(format!("Tasks (0/{})", self.store.len())))
                .alignment(Alignment::Center);
            f.render_widget(empty, area);
            return;
        }

        let header_cells = ["", "Title", "Status", "Priority", "Due", "Progress", "Who", "Tags"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().bg(PURPLE).fg(Color::White))
            .height(1);

        let rows: Vec<Row> = self
            .visible
            .iter()
            .filter_map(|&id| self.store.get(id))
            .map(|task| {
                let done = task.is_completed();
                let check = if done { "[x]" } else { "[ ]" };
                let title_style = if done {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                let due_style = if is_overdue(task, now) {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default()
                };
                let progress = if done || task.progress.get() == 0 {
                    String::new()
                } else {
                    task.effective_progress().to_string()
                };
                Row::new(vec![
                    Cell::from(check),
                    Cell::from(task.title.clone()).style(title_style),
                    Cell::from(format_status(task.status)).style(Style::default().fg(status_color(task.status))),
                    Cell::from(format_priority(task.priority))
                        .style(Style::default().fg(priority_color(task.priority))),
                    Cell::from(format!(
                        "{} ({})",
                        format_due_short(task.due_date),
                        format_due_relative(task.due_date, today)
                    ))
                    .style(due_style),
                    Cell::from(progress),
                    Cell::from(task.assignee.initial().to_string()),
                    Cell::from(task.tags.join(",")),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(3),  // Check
            Constraint::Min(24),    // Title
            Constraint::Length(11), // Status
            Constraint::Length(8),  // Priority
            Constraint::Length(18), // Due
            Constraint::Length(8),  // Progress
            Constraint::Length(3),  // Who
            Constraint::Min(10),    // Tags
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Tasks ({}/{}) - Press 'h' for help",
                self.visible.len(),
                self.store.len()
            )))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.task_list_state);
    }

    /// Render the main board: header, stats, filters, sidebar and table.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let stats = self.stats();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Stats
                Constraint::Length(3), // Filters
                Constraint::Min(0),    // Sidebar + table
            ])
            .split(area);

        self.render_header(f, chunks[0], &stats);
        self.render_stats(f, chunks[1], &stats);
        self.render_filter_bar(f, chunks[2]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(chunks[3]);
        self.render_sidebar(f, body[0]);
        self.render_task_table(f, body[1]);
    }

    /// Render the add-task form as a popup over the board.
    fn render_task_form(&mut self, f: &mut Frame, area: Rect) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .title("Add Task - Enter to create, Esc to cancel")
            .border_style(Style::default().fg(PURPLE));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Description
                Constraint::Length(3), // Tags
                Constraint::Length(3), // Due
                Constraint::Length(3), // Assignee
                Constraint::Length(3), // Priority
                Constraint::Length(3), // Status
                Constraint::Min(0),
            ])
            .split(inner);

        let form = &self.task_form;
        let text_fields = [
            (TITLE_GLOBAL_ORDER, "Title *", &form.title),
            (DESCRIPTION_GLOBAL_ORDER, "Description", &form.description),
            (TAGS_GLOBAL_ORDER, "Tags (comma separated)", &form.tags),
            (DUE_GLOBAL_ORDER, "Due * (YYYY-MM-DD, today, tomorrow, in 3d)", &form.due),
            (ASSIGNEE_GLOBAL_ORDER, "Assignee", &form.assignee),
        ];
        for (order, label, field) in text_fields {
            let style = if form.current_field == order { Style::default().fg(GOLD) } else { Style::default() };
            let input = Paragraph::new(field.value.as_str())
                .block(Block::default().borders(Borders::ALL).title(label).border_style(style))
                .wrap(Wrap { trim: false });
            f.render_widget(input, rows[order]);
            if field.active {
                f.set_cursor_position((cursor_column(rows[order], 1, field.cursor), rows[order].y + 1));
            }
        }

        let selectors = [
            (PRIORITY_GLOBAL_ORDER, "Priority", format_priority(form.selected_priority())),
            (STATUS_GLOBAL_ORDER, "Status", format_status(form.selected_status())),
        ];
        for (order, label, value) in selectors {
            let style = if form.current_field == order { Style::default().fg(GOLD) } else { Style::default() };
            let selector = Paragraph::new(format!("< {} >", value))
                .block(Block::default().borders(Borders::ALL).title(label).border_style(style));
            f.render_widget(selector, rows[order]);
        }
    }

    /// Render the key reference.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let section = |title: &'static str| {
            Line::from(vec![Span::styled(title, Style::default().add_modifier(Modifier::BOLD))])
        };
        let help_text = vec![
            section("Task Manager Help"),
            Line::from(""),
            section("Task List:"),
            Line::from("  ↑/↓ k/j        Navigate tasks"),
            Line::from("  Space/c/Enter  Toggle task completion"),
            Line::from("  a              Add new task"),
            Line::from("  /              Search title, description and tags"),
            Line::from("  s              Cycle status filter"),
            Line::from("  p              Cycle priority filter"),
            Line::from("  o              Cycle sort order (due date, priority, status, title, newest)"),
            Line::from("  Tab            Highlight next project"),
            Line::from("  h/F1           Show this help"),
            Line::from("  q/Esc/Ctrl+C   Quit"),
            Line::from(""),
            section("Add Task Form:"),
            Line::from("  Tab/↑/↓        Navigate between fields"),
            Line::from("  ←/→            Change priority/status selectors"),
            Line::from("  Enter          Create task"),
            Line::from("  Esc            Cancel and return"),
            Line::from(""),
            section("Due Date Formats:"),
            Line::from("  YYYY-MM-DD     Specific date (e.g., 2025-12-24)"),
            Line::from("  today          Today's date"),
            Line::from("  tomorrow       Tomorrow's date"),
            Line::from("  in 3d / in 2w  Days or weeks from today"),
            Line::from("  fri, next mon  Upcoming weekday"),
        ];

        let paragraph = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help - Press Esc to return"))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else if self.input_mode == InputMode::Search {
            format!("Search: {} (Esc to clear, Enter to confirm)", self.search.value)
        } else {
            match self.state {
                AppState::TaskList if self.query.is_filtering() => format!(
                    "Tasks: {} of {} (filtered) | Press 'h' for help",
                    self.visible.len(),
                    self.store.len()
                ),
                AppState::TaskList => format!("Tasks: {} | Press 'h' for help", self.visible.len()),
                AppState::AddTask => "Add New Task".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let bg = if self.state == AppState::AddTask && !self.status_message.is_empty() {
            DARK_RED
        } else {
            PURPLE
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(bg).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the screen renderers.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        match self.state {
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::AddTask => {
                self.render_task_list(f, chunks[0]);
                self.render_task_form(f, chunks[0]);
            }
            AppState::Help => self.render_help(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Reads the wall clock once per frame; everything below works from `self.now`.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.set_now(Utc::now());
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Selector label for a filter: "All" or the formatted value.
fn filter_label<T: Copy>(filter: Filter<T>, format: fn(T) -> &'static str) -> &'static str {
    match filter {
        Filter::Any => "All",
        Filter::Only(v) => format(v),
    }
}
