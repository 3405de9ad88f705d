//! JSON file persistence for the task store.
//!
//! # Responsibility
//! - Encode tasks as an explicit `TaskRecord` array.
//! - Replace the task file atomically on save.
//! - Restore a store from the file on startup.
//!
//! # Invariants
//! - Records are written in store insertion order.
//! - A missing file loads as an empty store; it is not an error.
//! - Loaded records are kept verbatim (no uniqueness re-validation).

use super::{PersistError, PersistResult, TaskRepository};
use crate::model::task::{Task, TaskId};
use crate::store::task_store::TaskStore;
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Default task file name, resolved against the working directory.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// On-disk shape of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            completed: record.completed,
        }
    }
}

/// Writes every task in `store` to `path`, replacing any existing file.
///
/// # Side effects
/// - Creates a temp file next to `path`, then renames it into place.
/// - Emits `tasks_save` logging events with count and duration.
pub fn save_tasks(store: &TaskStore, path: impl AsRef<Path>) -> PersistResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    match write_records(store, path) {
        Ok(()) => {
            info!(
                "event=tasks_save module=persist status=ok count={} duration_ms={}",
                store.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=tasks_save module=persist status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

/// Reads the task file at `path` into a new store.
///
/// # Errors
/// - `Io` when the file exists but cannot be read.
/// - `Parse` when the content is not JSON.
/// - `Schema` when records are missing fields, carry wrong types, or use id
///   `0` or `TaskId::MAX`.
pub fn load_tasks(path: impl AsRef<Path>) -> PersistResult<TaskStore> {
    let path = path.as_ref();
    let started_at = Instant::now();

    match read_records(path) {
        Ok(Some(records)) => {
            let tasks = records.into_iter().map(Task::from).collect();
            let store = TaskStore::from_tasks(tasks);
            info!(
                "event=tasks_load module=persist status=ok source=file count={} next_id={} duration_ms={}",
                store.len(),
                store.next_id(),
                started_at.elapsed().as_millis()
            );
            Ok(store)
        }
        Ok(None) => {
            info!(
                "event=tasks_load module=persist status=ok source=missing count=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(TaskStore::new())
        }
        Err(err) => {
            error!(
                "event=tasks_load module=persist status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                err.code(),
                err
            );
            Err(err)
        }
    }
}

/// File-backed `TaskRepository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_TASKS_FILE)
    }
}

impl TaskRepository for JsonFileRepository {
    fn load(&self) -> PersistResult<TaskStore> {
        load_tasks(&self.path)
    }

    fn save(&self, store: &TaskStore) -> PersistResult<()> {
        save_tasks(store, &self.path)
    }
}

fn write_records(store: &TaskStore, path: &Path) -> PersistResult<()> {
    let io_error = |source: std::io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let records: Vec<TaskRecord> = store.list().iter().map(TaskRecord::from).collect();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    serde_json::to_writer(&mut temp, &records)
        .map_err(std::io::Error::from)
        .map_err(io_error)?;
    temp.flush().map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}

fn read_records(path: &Path) -> PersistResult<Option<Vec<TaskRecord>>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let records: Vec<TaskRecord> =
        serde_json::from_slice(&bytes).map_err(|err| classify_decode_error(path, err))?;

    if let Some(index) = records.iter().position(|record| record.id == 0) {
        return Err(PersistError::Schema {
            path: path.to_path_buf(),
            message: format!("record {index} has id 0; ids must be positive"),
        });
    }
    if let Some(index) = records.iter().position(|record| record.id == TaskId::MAX) {
        return Err(PersistError::Schema {
            path: path.to_path_buf(),
            message: format!("record {index} has id {}; ids must be below it", TaskId::MAX),
        });
    }

    Ok(Some(records))
}

fn classify_decode_error(path: &Path, err: serde_json::Error) -> PersistError {
    match err.classify() {
        Category::Data => PersistError::Schema {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
        Category::Syntax | Category::Eof => PersistError::Parse {
            path: path.to_path_buf(),
            source: err,
        },
        Category::Io => PersistError::Io {
            path: path.to_path_buf(),
            source: err.into(),
        },
    }
}
