//! Enumerations and field types for task management.
//!
//! This module defines the structured values used to categorise tasks (status and
//! priority), the sort keys understood by the view engine, and the `Filter` option
//! type that stands in for the "all" choice of a filter selector.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Error raised when a field value cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown {kind} '{value}'")]
    Unknown { kind: &'static str, value: String },
}

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Review,
    Completed,
}

impl Status {
    /// Every status, in the order selectors present them.
    pub const ALL: [Status; 4] = [Status::Todo, Status::InProgress, Status::Review, Status::Completed];

    /// Sort rank: active work first, finished work last.
    pub fn rank(self) -> u8 {
        match self {
            Status::InProgress => 0,
            Status::Review => 1,
            Status::Todo => 2,
            Status::Completed => 3,
        }
    }

    /// Wire name, as used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Review => "review",
            Status::Completed => "completed",
        }
    }
}

impl FromStr for Status {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FieldError::Unknown { kind: "status", value: s.to_string() })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Importance of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Sort rank: highest priority first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FieldError::Unknown { kind: "priority", value: s.to_string() })
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Available sorting options for the task view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Earliest due date first.
    #[default]
    DueDate,
    Priority,
    Status,
    Title,
    /// Keep the store order.
    Insertion,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::DueDate,
        SortKey::Priority,
        SortKey::Status,
        SortKey::Title,
        SortKey::Insertion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DueDate => "due-date",
            SortKey::Priority => "priority",
            SortKey::Status => "status",
            SortKey::Title => "title",
            SortKey::Insertion => "insertion",
        }
    }

    /// Parse a sort key, treating anything unrecognised as insertion order.
    ///
    /// Accepts the camelCase spelling `dueDate` as well as `due-date`.
    pub fn parse_lenient(s: &str) -> SortKey {
        match s.trim().to_ascii_lowercase().as_str() {
            "due-date" | "duedate" | "due" => SortKey::DueDate,
            "priority" => SortKey::Priority,
            "status" => SortKey::Status,
            "title" => SortKey::Title,
            _ => SortKey::Insertion,
        }
    }

    /// The next key in selector order, wrapping around.
    pub fn next(self) -> SortKey {
        let idx = SortKey::ALL.iter().position(|&k| k == self).unwrap_or(0);
        SortKey::ALL[(idx + 1) % SortKey::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter criterion: either no filtering at all or a single accepted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Whether `value` passes this filter.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Filter::Any => true,
            Filter::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Copy + PartialEq> Filter<T> {
    /// Step through `Any` followed by each of `choices`, wrapping back to `Any`.
    pub fn cycle(self, choices: &[T]) -> Filter<T> {
        match self {
            Filter::Any => choices.first().map_or(Filter::Any, |&c| Filter::Only(c)),
            Filter::Only(current) => {
                let idx = choices.iter().position(|&c| c == current);
                match idx.and_then(|i| choices.get(i + 1)) {
                    Some(&next) => Filter::Only(next),
                    None => Filter::Any,
                }
            }
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::Any)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Any => f.write_str("all"),
            Filter::Only(v) => v.fmt(f),
        }
    }
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Todo => "To Do",
        Status::InProgress => "In Progress",
        Status::Review => "Review",
        Status::Completed => "Completed",
    }
}

/// Format a priority level for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

/// Format a sort key for display.
pub fn format_sort_key(k: SortKey) -> &'static str {
    match k {
        SortKey::DueDate => "Due Date",
        SortKey::Priority => "Priority",
        SortKey::Status => "Status",
        SortKey::Title => "Title",
        SortKey::Insertion => "Newest First",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_str() {
        for st in Status::ALL {
            assert_eq!(st.as_str().parse::<Status>(), Ok(st));
        }
        assert_eq!("In-Progress".parse::<Status>(), Ok(Status::InProgress));
        assert!("doing".parse::<Status>().is_err());
    }

    #[test]
    fn test_ranks() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
        assert_eq!(Status::InProgress.rank(), 0);
        assert_eq!(Status::Completed.rank(), 3);
    }

    #[test]
    fn test_filter_all_sentinel() {
        assert_eq!("all".parse::<Filter<Status>>(), Ok(Filter::Any));
        assert_eq!("ALL".parse::<Filter<Priority>>(), Ok(Filter::Any));
        assert_eq!("review".parse::<Filter<Status>>(), Ok(Filter::Only(Status::Review)));
        assert!("urgent".parse::<Filter<Priority>>().is_err());
    }

    #[test]
    fn test_filter_cycle_wraps_to_any() {
        let mut f = Filter::Any;
        let mut seen = Vec::new();
        for _ in 0..4 {
            f = f.cycle(&Priority::ALL);
            seen.push(f);
        }
        assert_eq!(
            seen,
            vec![
                Filter::Only(Priority::Low),
                Filter::Only(Priority::Medium),
                Filter::Only(Priority::High),
                Filter::Any,
            ]
        );
    }

    #[test]
    fn test_sort_key_lenient_parse() {
        assert_eq!(SortKey::parse_lenient("dueDate"), SortKey::DueDate);
        assert_eq!(SortKey::parse_lenient("due-date"), SortKey::DueDate);
        assert_eq!(SortKey::parse_lenient(" Title "), SortKey::Title);
        assert_eq!(SortKey::parse_lenient("assignee"), SortKey::Insertion);
        assert_eq!(SortKey::Insertion.next(), SortKey::DueDate);
    }
}
