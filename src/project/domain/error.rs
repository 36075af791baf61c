//! Error types for project domain validation and parsing.

use crate::form::FieldError;
use thiserror::Error;

/// Errors returned while constructing project values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The value is not a valid project identifier.
    #[error("invalid project identifier '{0}'")]
    InvalidProjectId(String),

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,

    /// The color is not part of the palette.
    #[error("unknown project color: {0}")]
    UnknownColor(String),

    /// The icon is not part of the icon set.
    #[error("unknown project icon: {0}")]
    UnknownIcon(String),

    /// A submitted form field could not be decoded.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A seed helper was asked for an unsupported number of projects.
    #[error("project count must be between {min} and {max}, got {count}")]
    CountOutOfRange {
        /// Requested count.
        count: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },
}
