//! In-memory task ownership.
//!
//! # Responsibility
//! - Hold the authoritative ordered task collection for one process.
//! - Guarantee identifier uniqueness and monotonicity for new tasks.
//!
//! # Invariants
//! - Store APIs return semantic errors (`NotFound`, `Validation`) and never
//!   mutate state when they fail.

pub mod task_store;
