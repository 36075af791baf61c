//! Error types for task domain validation and parsing.

use crate::form::FieldError;
use thiserror::Error;

/// Errors returned while constructing or validating task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The value is not a valid task identifier.
    #[error("invalid task identifier '{0}'")]
    InvalidTaskId(String),

    /// The external reference is empty after trimming.
    #[error("external reference must not be empty")]
    EmptyExternalRef,

    /// A title is required by policy but missing or blank.
    #[error("task title must not be empty")]
    MissingTitle,

    /// The duration is negative.
    #[error("invalid duration {0}, expected a non-negative number of minutes")]
    NegativeDuration(i32),

    /// A submitted form field could not be decoded.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A seed helper was asked for an unsupported number of tasks.
    #[error("task count must be between {min} and {max}, got {count}")]
    CountOutOfRange {
        /// Requested count.
        count: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },
}
