//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task record used by store and persistence.
//! - Own title validation rules shared by every write path.
//!
//! # Invariants
//! - Every task is identified by a positive `TaskId` assigned by the store.
//! - Deletion removes a task; there is no tombstone state.

pub mod task;
