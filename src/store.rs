//! In-memory task store.
//!
//! The `TaskStore` owns the authoritative, ordered task collection. It hands out
//! ids, prepends new tasks, and applies the completion toggle. Nothing else in the
//! crate mutates tasks directly.

use tracing::debug;

use crate::fields::Status;
use crate::seed;
use crate::task::{NewTask, Progress, Task, TaskId};

/// Error type for store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Ordered collection of tasks, most recently added first.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TaskStore { tasks: Vec::new(), next_id: 1 }
    }

    /// Create a store holding `tasks` in the given order.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.get()).max().unwrap_or(0) + 1;
        TaskStore { tasks, next_id }
    }

    /// Create a store holding the sample tasks.
    pub fn seeded() -> Self {
        Self::with_tasks(seed::sample_tasks())
    }

    /// All tasks in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by ID.
    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Allocate the next task ID. Ids only ever grow, so none is reused.
    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a task at the front of the collection and return it.
    ///
    /// The input is taken as-is; an empty title is accepted.
    pub fn add_task(&mut self, input: NewTask) -> &Task {
        let id = self.allocate_id();
        let task = Task::from_new(id, input);
        debug!(id = %task.id, title = %task.title, "task added");
        self.tasks.insert(0, task);
        &self.tasks[0]
    }

    /// Mark a task completed (progress 100) or back to to-do (progress 0).
    ///
    /// Any previous review or in-progress state and progress value is dropped.
    /// An unknown id leaves the store untouched and yields `StoreError::NotFound`.
    pub fn set_completion(&mut self, id: TaskId, completed: bool) -> Result<&Task, StoreError> {
        let Some(task) = self.get_mut(id) else {
            return Err(StoreError::NotFound(id));
        };
        if completed {
            task.status = Status::Completed;
            task.progress = Progress::DONE;
        } else {
            task.status = Status::Todo;
            task.progress = Progress::NONE;
        }
        debug!(id = %id, completed, "task completion set");
        Ok(task)
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::task::Assignee;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn new_task(title: &str) -> NewTask {
        NewTask::new(
            title,
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            Assignee::new("Jo", "avatar://jo"),
        )
    }

    #[test]
    fn test_add_task_prepends_and_grows_by_one() {
        let mut store = TaskStore::seeded();
        let before = store.len();
        let id = store.add_task(new_task("Fresh")).id;
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.tasks()[0].id, id);
        assert_eq!(store.tasks()[0].title, "Fresh");
        // Seed order is kept behind the new task.
        assert_eq!(store.tasks()[1].id, TaskId::new(1));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut store = TaskStore::seeded();
        let a = store.add_task(new_task("a")).id;
        let b = store.add_task(new_task("b")).id;
        assert_eq!(a, TaskId::new(9));
        assert_eq!(b, TaskId::new(10));
        let mut ids: Vec<_> = store.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let mut store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.add_task(new_task("")).id, TaskId::new(1));
        assert_eq!(store.tasks()[0].title, "");
    }

    #[test]
    fn test_set_completion_true_and_false() {
        let mut store = TaskStore::seeded();
        let id = TaskId::new(3); // review, 90%

        let task = store.set_completion(id, true).unwrap();
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.progress.get(), 100);

        let task = store.set_completion(id, false).unwrap();
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.progress.get(), 0);
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_set_completion_unknown_id_is_noop() {
        let mut store = TaskStore::seeded();
        let before = store.tasks().to_vec();
        let err = store.set_completion(TaskId::new(404), true).unwrap_err();
        assert_eq!(err, StoreError::NotFound(TaskId::new(404)));
        assert_eq!(store.tasks(), before.as_slice());
    }
}
