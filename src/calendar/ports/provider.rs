//! Port for reading events from an external calendar.

use crate::calendar::domain::{AccessToken, Event};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for calendar provider operations.
pub type CalendarProviderResult<T> = Result<T, CalendarProviderError>;

/// Read-only source of calendar events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Lists timed events starting in `[start, end)`, ordered by start.
    ///
    /// Entries without a timed start (all-day events) are skipped.
    async fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalendarProviderResult<Vec<Event>>;
}

/// Supplier of bearer tokens for a calendar provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Returns a token that is valid now, refreshing it if needed.
    async fn refresh(&self) -> Result<AccessToken, TokenSourceError>;
}

/// Errors raised while obtaining a bearer token.
#[derive(Debug, Clone, Error)]
pub enum TokenSourceError {
    /// No credentials are configured.
    #[error("no calendar credentials configured")]
    MissingCredentials,

    /// The token endpoint or credential store failed.
    #[error("token refresh failed: {0}")]
    Refresh(Arc<dyn std::error::Error + Send + Sync>),
}

impl TokenSourceError {
    /// Wraps a refresh failure.
    pub fn refresh(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Refresh(Arc::new(err))
    }
}

/// Errors returned by calendar providers.
#[derive(Debug, Clone, Error)]
pub enum CalendarProviderError {
    /// The request could not be sent or the response not read.
    #[error("calendar request failed: {0}")]
    Request(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a non-success status.
    #[error("calendar provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("calendar response could not be decoded: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),

    /// No bearer token could be obtained.
    #[error(transparent)]
    Token(#[from] TokenSourceError),
}

impl CalendarProviderError {
    /// Wraps a transport failure.
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Arc::new(err))
    }

    /// Wraps a decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
