//! Task store and its id counter.
//!
//! # Responsibility
//! - Provide add/list/complete/delete over an owned task collection.
//! - Rebuild counter state from persisted tasks.
//!
//! # Invariants
//! - `next_id` is greater than every id assigned or loaded.
//! - Listing order equals insertion (or load) order.
//! - A failed operation leaves tasks and counter untouched.

use crate::model::task::{normalize_title, Task, TaskId, TaskValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No task carries the requested id.
    NotFound(TaskId),
    /// Input rejected before any mutation.
    Validation(TaskValidationError),
    /// Every positive `TaskId` has been handed out.
    IdSpaceExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::IdSpaceExhausted => write!(f, "no task ids left to assign"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Validation(err) => Some(err),
            Self::IdSpaceExhausted => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered collection of tasks plus the monotonic id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store whose first id will be `1`.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a store from already-persisted tasks.
    ///
    /// Tasks are kept verbatim and in order; duplicate ids are not rejected.
    /// `next_id` becomes `max(id) + 1`, or `1` when `tasks` is empty. A
    /// maximum of `TaskId::MAX` saturates, leaving the store unable to `add`.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self { tasks, next_id }
    }

    /// Adds a new incomplete task and returns it.
    ///
    /// # Contract
    /// - `title` is trimmed; blank titles fail with `Validation`.
    /// - The counter advances only on success.
    /// - `TaskId::MAX` is never assigned; reaching it fails with
    ///   `IdSpaceExhausted`.
    pub fn add(&mut self, title: &str) -> StoreResult<Task> {
        let title = normalize_title(title)?;
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted)?;
        let task = Task::new(self.next_id, title);
        self.next_id = following;
        self.tasks.push(task.clone());
        debug!(
            "event=task_add module=store status=ok id={} next_id={}",
            task.id, self.next_id
        );
        Ok(task)
    }

    /// Returns tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Marks a task completed and returns its updated state.
    ///
    /// Completing an already-completed task succeeds without change.
    pub fn complete(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.complete();
        debug!("event=task_complete module=store status=ok id={id}");
        Ok(task.clone())
    }

    /// Removes a task and returns it.
    ///
    /// Fails with `NotFound` when nothing matches. When a loaded file carried
    /// duplicate ids every matching record is removed; the first one is
    /// returned.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<Task> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = self.tasks.remove(position);
        self.tasks.retain(|task| task.id != id);
        debug!(
            "event=task_delete module=store status=ok id={id} remaining={}",
            self.tasks.len()
        );
        Ok(removed)
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TaskStore};
    use crate::model::task::{Task, TaskId, TaskValidationError};

    #[test]
    fn blank_title_does_not_advance_counter() {
        let mut store = TaskStore::new();
        let err = store.add("   ").expect_err("blank title must be rejected");
        assert_eq!(err, StoreError::Validation(TaskValidationError::EmptyTitle));
        assert_eq!(store.next_id(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn from_tasks_derives_next_id_from_max() {
        let store = TaskStore::from_tasks(vec![Task::new(7, "a"), Task::new(2, "b")]);
        assert_eq!(store.next_id(), 8);
        assert_eq!(TaskStore::from_tasks(Vec::new()).next_id(), 1);
    }

    #[test]
    fn from_tasks_saturates_at_max_id() {
        let mut store = TaskStore::from_tasks(vec![Task::new(TaskId::MAX, "last")]);
        assert_eq!(store.next_id(), TaskId::MAX);
        assert_eq!(store.add("one more"), Err(StoreError::IdSpaceExhausted));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_all_duplicate_records() {
        let mut store = TaskStore::from_tasks(vec![
            Task::new(4, "first"),
            Task::new(5, "other"),
            Task::new(4, "second"),
        ]);
        let removed = store.delete(4).expect("id 4 exists");
        assert_eq!(removed.title, "first");
        assert_eq!(store.len(), 1);
        assert!(store.get(4).is_none());
    }
}
