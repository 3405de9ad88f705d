//! Core task tracking logic for taskmgr.
//! This crate owns the task store invariants and the task file format.

pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_title, Task, TaskId, TaskValidationError};
pub use persist::{
    load_tasks, save_tasks, JsonFileRepository, PersistError, PersistResult, TaskRecord,
    TaskRepository, DEFAULT_TASKS_FILE,
};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};
pub use store::task_store::{StoreError, StoreResult, TaskStore};

