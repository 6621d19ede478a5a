//! Summary counts over the whole board.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::fields::Status;
use crate::task::Task;

/// Aggregate counts shown above the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

impl TaskStats {
    /// Share of completed tasks, 0 for an empty board.
    pub fn completion_percent(&self) -> u16 {
        if self.total == 0 {
            0
        } else {
            (self.completed * 100 / self.total) as u16
        }
    }
}

/// The instant a due date falls due: midnight UTC at the start of that day.
pub fn due_instant(due: NaiveDate) -> DateTime<Utc> {
    due.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Whether `task` is past due at `now` and still open.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    !task.is_completed() && due_instant(task.due_date) < now
}

/// Count tasks by state. Always computed over every task, never a filtered view.
pub fn compute_stats<'a, I>(tasks: I, now: DateTime<Utc>) -> TaskStats
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().fold(TaskStats::default(), |mut stats, task| {
        stats.total += 1;
        match task.status {
            Status::Completed => stats.completed += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Todo | Status::Review => {}
        }
        if is_overdue(task, now) {
            stats.overdue += 1;
        }
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_tasks;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_seed_stats() {
        let stats = compute_stats(&sample_tasks(), at(2025, 11, 6, 0));
        assert_eq!(
            stats,
            TaskStats { total: 8, completed: 1, in_progress: 4, overdue: 4 }
        );
    }

    #[test]
    fn test_overdue_is_strictly_before_now() {
        let tasks = sample_tasks();
        // Task 6 falls due at 2025-11-01T00:00Z; task 5 (10-28) is completed.
        assert_eq!(compute_stats(&tasks, at(2025, 11, 1, 0)).overdue, 0);
        assert_eq!(compute_stats(&tasks, at(2025, 11, 1, 9)).overdue, 1);
        assert_eq!(compute_stats(&tasks, at(2025, 10, 1, 0)).overdue, 0);
    }

    #[test]
    fn test_completed_tasks_never_overdue() {
        let mut tasks = sample_tasks();
        for t in &mut tasks {
            t.status = Status::Completed;
        }
        let stats = compute_stats(&tasks, at(2030, 1, 1, 0));
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.completed, 8);
        assert_eq!(stats.completion_percent(), 100);
    }

    #[test]
    fn test_counts_stay_within_total() {
        let stats = compute_stats(&sample_tasks(), at(2025, 11, 6, 0));
        assert!(stats.completed + stats.in_progress <= stats.total);
        assert_eq!(stats.completion_percent(), 12);
    }

    #[test]
    fn test_empty_board() {
        let tasks: Vec<Task> = Vec::new();
        let stats = compute_stats(&tasks, at(2025, 11, 6, 0));
        assert_eq!(stats, TaskStats::default());
        assert_eq!(stats.completion_percent(), 0);
    }
}
