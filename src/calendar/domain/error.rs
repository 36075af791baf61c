//! Error types for calendar domain values.

use thiserror::Error;

/// Errors returned while constructing calendar values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarDomainError {
    /// The provider supplied a blank event identifier.
    #[error("event identifier must not be empty")]
    EmptyEventId,

    /// The provider supplied a blank access token.
    #[error("access token must not be empty")]
    EmptyAccessToken,
}
