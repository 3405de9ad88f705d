//! Task domain model.
//!
//! # Responsibility
//! - Define the record shown to the user as one to-do item.
//! - Provide the completion transition and title normalization.
//!
//! # Invariants
//! - `id` is positive and never changes after creation.
//! - `completed` only moves from `false` to `true`.
//! - Titles created through `normalize_title` are trimmed and non-empty.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier assigned by `TaskStore`.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Validation failures for task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming surrounding whitespace.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One user-visible to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Creates an incomplete task with a store-assigned id.
    ///
    /// Does not validate `title`; callers go through `normalize_title` first.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Marks this task as completed. Calling it again is a no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Human-readable status label used by list views.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Incomplete"
        }
    }
}

/// Trims surrounding whitespace and rejects empty titles.
pub fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
