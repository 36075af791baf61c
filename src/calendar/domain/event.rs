//! Read-only calendar events.

use super::EventId;
use crate::task::domain::{Schedulable, TaskDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An externally owned calendar entry shown on the timeline.
///
/// Events carry the same descriptive fields as tasks but always have a
/// start time and are never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    #[serde(flatten)]
    details: TaskDetails,
    conference: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Event {
    /// Creates an event starting at `start`.
    ///
    /// Any start time already present in `details` is replaced. Creation and
    /// update timestamps default to `start`.
    #[must_use]
    pub const fn new(id: EventId, start: DateTime<Utc>, details: TaskDetails) -> Self {
        Self {
            id,
            details: details.with_start_time(start),
            conference: None,
            created_at: start,
            updated_at: start,
        }
    }

    /// Attaches conference metadata such as a meeting link.
    #[must_use]
    pub fn with_conference(mut self, conference: impl Into<String>) -> Self {
        self.conference = Some(conference.into());
        self
    }

    /// Sets the provider's creation and update timestamps.
    #[must_use]
    pub const fn with_timestamps(
        mut self,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Returns the provider identifier.
    #[must_use]
    pub const fn id(&self) -> &EventId {
        &self.id
    }

    /// Returns the descriptive fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.details.title.as_deref()
    }

    /// Returns the start instant.
    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        // `new` always sets the start; a deserialized event missing one
        // falls back to its creation time.
        self.details.start_time.unwrap_or(self.created_at)
    }

    /// Returns the conference metadata, if any.
    #[must_use]
    pub fn conference(&self) -> Option<&str> {
        self.conference.as_deref()
    }

    /// Returns the provider's creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the provider's latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Schedulable for Event {
    fn start_time(&self) -> Option<DateTime<Utc>> {
        Some(self.start())
    }

    fn rank(&self) -> Option<i32> {
        self.details.rank
    }

    fn duration_minutes(&self) -> Option<i32> {
        self.details.duration_minutes
    }
}
