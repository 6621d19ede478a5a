//! # Taskflow
//!
//! A single-user task board kept entirely in memory. The store owns the tasks;
//! everything shown on screen is derived from it on demand:
//!
//! - [`store::TaskStore`] adds tasks (newest first) and toggles completion.
//! - [`view::derive_view`] filters by search text, status and priority, then
//!   sorts stably by due date, priority, status, title or insertion order.
//! - [`stats::compute_stats`] counts total, completed, in-progress and overdue
//!   tasks for an explicit `now`.
//!
//! The `taskflow` binary wraps this in a ratatui board and a few plain
//! commands (`list`, `stats`, `projects`).

pub mod cli;
pub mod cmd;
pub mod config;
pub mod dates;
pub mod fields;
pub mod logging;
pub mod seed;
pub mod stats;
pub mod store;
pub mod task;
pub mod view;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}
