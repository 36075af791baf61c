//! Bearer credentials for calendar providers.

use super::CalendarDomainError;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Short-lived bearer token with an optional expiry.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    secret: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a token that never expires.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDomainError::EmptyAccessToken`] for a blank secret.
    pub fn new(secret: impl Into<String>) -> Result<Self, CalendarDomainError> {
        let raw = secret.into();
        if raw.trim().is_empty() {
            return Err(CalendarDomainError::EmptyAccessToken);
        }
        Ok(Self {
            secret: raw,
            expires_at: None,
        })
    }

    /// Sets the expiry instant.
    #[must_use]
    pub const fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns the bearer secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns the expiry instant, if any.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the token stays valid for at least `leeway` after `now`.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, leeway: TimeDelta) -> bool {
        self.expires_at
            .is_none_or(|expiry| now.checked_add_signed(leeway).is_some_and(|edge| edge < expiry))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
