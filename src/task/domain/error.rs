//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty or whitespace-only.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The supplied task identifier is not a valid UUID.
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),
}
