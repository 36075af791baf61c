//! Identifier for provider-owned events.

use super::CalendarDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque event identifier assigned by the calendar provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps a provider identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDomainError::EmptyEventId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, CalendarDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CalendarDomainError::EmptyEventId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
