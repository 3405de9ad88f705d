//! Task use-case service.
//!
//! # Responsibility
//! - Own one `TaskStore` for the lifetime of a session.
//! - Load it from and flush it to a `TaskRepository`.
//!
//! # Invariants
//! - The store is populated only by a successful repository load.
//! - Mutations are kept in memory until `save` is called.

use crate::model::task::{Task, TaskId};
use crate::persist::{PersistError, TaskRepository};
use crate::store::task_store::{StoreError, TaskStore};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Recoverable store condition (missing id, invalid title).
    Store(StoreError),
    /// Storage boundary failure.
    Persist(PersistError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Persist(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Persist(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersistError> for ServiceError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

/// Session-scoped task service over a repository implementation.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    store: TaskStore,
}

impl<R: TaskRepository> TaskService<R> {
    /// Loads the store through `repo` and returns a ready service.
    pub fn open(repo: R) -> ServiceResult<Self> {
        let store = repo.load()?;
        Ok(Self { repo, store })
    }

    pub fn add_task(&mut self, title: &str) -> ServiceResult<Task> {
        Ok(self.store.add(title)?)
    }

    pub fn list_tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn complete_task(&mut self, id: TaskId) -> ServiceResult<Task> {
        Ok(self.store.complete(id)?)
    }

    pub fn delete_task(&mut self, id: TaskId) -> ServiceResult<Task> {
        Ok(self.store.delete(id)?)
    }

    /// Flushes the current store through the repository.
    pub fn save(&self) -> ServiceResult<()> {
        Ok(self.repo.save(&self.store)?)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }
}
