//! In-memory calendar and token adapters for tests and local runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::calendar::{
    domain::{AccessToken, Event},
    ports::{
        CalendarProvider, CalendarProviderError, CalendarProviderResult, TokenSource,
        TokenSourceError,
    },
};

/// Calendar provider backed by a fixed list of events.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendarProvider {
    events: Arc<RwLock<Vec<Event>>>,
    fetches: Arc<AtomicUsize>,
}

impl InMemoryCalendarProvider {
    /// Creates a provider with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider serving `events`.
    #[must_use]
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
            fetches: Arc::default(),
        }
    }

    /// Adds an event.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarProviderError::Request`] if the store is poisoned.
    pub fn push(&self, event: Event) -> CalendarProviderResult<()> {
        let mut events = self.events.write().map_err(|err| {
            CalendarProviderError::request(std::io::Error::other(err.to_string()))
        })?;
        events.push(event);
        Ok(())
    }

    /// Number of `list_events` calls served so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CalendarProvider for InMemoryCalendarProvider {
    async fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalendarProviderResult<Vec<Event>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let events = self.events.read().map_err(|err| {
            CalendarProviderError::request(std::io::Error::other(err.to_string()))
        })?;
        let mut selected: Vec<Event> = events
            .iter()
            .filter(|event| event.start() >= start && event.start() < end)
            .cloned()
            .collect();
        selected.sort_by_key(Event::start);
        Ok(selected)
    }
}

/// Token source that always hands out the same token.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: AccessToken,
}

impl StaticTokenSource {
    /// Creates a source for `token`.
    #[must_use]
    pub const fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn refresh(&self) -> Result<AccessToken, TokenSourceError> {
        Ok(self.token.clone())
    }
}
