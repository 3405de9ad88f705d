//! Persistence boundary between `TaskStore` and durable storage.
//!
//! # Responsibility
//! - Define the repository contract used by services.
//! - Classify storage failures into IO, parse and schema errors.
//!
//! # Invariants
//! - A load either returns a fully reconstructed store or an error, never a
//!   partially populated store.
//! - A failed save leaves the previously saved file untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_file;

pub use json_file::{load_tasks, save_tasks, JsonFileRepository, TaskRecord, DEFAULT_TASKS_FILE};

use crate::store::task_store::TaskStore;

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure while reading or writing the task file.
#[derive(Debug)]
pub enum PersistError {
    /// Underlying file system failure (permissions, missing directory, disk full).
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not valid JSON.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// File is valid JSON but does not match the task record schema.
    Schema { path: PathBuf, message: String },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "task file io failed at `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => write!(
                f,
                "task file `{}` is not valid JSON: {source}",
                path.display()
            ),
            Self::Schema { path, message } => write!(
                f,
                "task file `{}` has invalid task records: {message}",
                path.display()
            ),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Schema { .. } => None,
        }
    }
}

impl PersistError {
    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io_failed",
            Self::Parse { .. } => "parse_failed",
            Self::Schema { .. } => "schema_invalid",
        }
    }
}

/// Repository interface for whole-store load/save.
pub trait TaskRepository {
    fn load(&self) -> PersistResult<TaskStore>;
    fn save(&self, store: &TaskStore) -> PersistResult<()>;
}
