//! Task data structure and related functionality.
//!
//! This module defines the core `Task` struct that represents a single work item,
//! the `NewTask` input used to create one, and the small value types it is built from.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fields::*;

/// Error type for task value construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u16),
    #[error("invalid task id '{0}'")]
    InvalidId(String),
}

/// Opaque task identifier, unique for the lifetime of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        TaskId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for TaskId {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| TaskError::InvalidId(s.to_string()))
    }
}

// Ids travel as strings ("1", "2", ...) in JSON output.
impl Serialize for TaskId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Completion percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Progress(u8);

impl Progress {
    pub const NONE: Progress = Progress(0);
    pub const DONE: Progress = Progress(100);

    pub fn new(value: u16) -> Result<Self, TaskError> {
        if value > 100 {
            return Err(TaskError::ProgressOutOfRange(value));
        }
        Ok(Progress(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u16> for Progress {
    type Error = TaskError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Progress::new(value)
    }
}

impl From<Progress> for u16 {
    fn from(p: Progress) -> u16 {
        p.0 as u16
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The person a task is assigned to. Denormalised, not a separate entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    pub name: String,
    pub avatar_ref: String,
}

impl Assignee {
    pub fn new(name: impl Into<String>, avatar_ref: impl Into<String>) -> Self {
        Assignee { name: name.into(), avatar_ref: avatar_ref.into() }
    }

    /// First character of the name, used where an avatar cannot be shown.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// A unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub assignee: Assignee,
    #[serde(default)]
    pub tags: Vec<String>,
    pub progress: Progress,
}

impl Task {
    /// Attach an id to task input.
    pub fn from_new(id: TaskId, input: NewTask) -> Self {
        Task {
            id,
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            due_date: input.due_date,
            assignee: input.assignee,
            tags: input.tags,
            progress: input.progress,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Progress as presented: completed tasks always read as 100%.
    pub fn effective_progress(&self) -> Progress {
        if self.is_completed() {
            Progress::DONE
        } else {
            self.progress
        }
    }
}

/// Everything needed to create a task except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub assignee: Assignee,
    #[serde(default)]
    pub tags: Vec<String>,
    pub progress: Progress,
}

impl NewTask {
    /// A to-do item with medium priority, no tags and no progress.
    pub fn new(title: impl Into<String>, due_date: NaiveDate, assignee: Assignee) -> Self {
        NewTask {
            title: title.into(),
            description: String::new(),
            status: Status::Todo,
            priority: Priority::Medium,
            due_date,
            assignee,
            tags: Vec::new(),
            progress: Progress::NONE,
        }
    }
}

/// A named grouping shown next to the task list.
///
/// `task_count` is a display value only; tasks carry no project reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color_tag: String,
    pub task_count: u32,
}
