//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and repository load/save into use-case APIs.
//! - Keep the CLI decoupled from storage details.

pub mod task_service;
