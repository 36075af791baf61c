//! Google Calendar v3 adapter.
//!
//! Lists expanded single events for a time range with a bearer token and
//! maps each timed entry onto an [`Event`]. All-day entries carry a `date`
//! instead of a `dateTime` start and are skipped, as are cancelled entries.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::calendar::{
    domain::{Event, EventId},
    ports::{CalendarProvider, CalendarProviderError, CalendarProviderResult, TokenSource},
};
use crate::task::domain::TaskDetails;

/// Public Google Calendar API root.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Connection settings for the Google Calendar adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// API root, overridable for tests and proxies.
    pub base_url: String,
    /// Calendar to read; `primary` is the signed-in user's calendar.
    pub calendar_id: String,
    /// Upper bound on events returned for one range.
    pub max_results: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            calendar_id: "primary".to_owned(),
            max_results: 10,
        }
    }
}

impl CalendarConfig {
    /// Sets the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the calendar identifier.
    #[must_use]
    pub fn with_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = calendar_id.into();
        self
    }

    fn events_url(&self) -> String {
        format!(
            "{}/calendars/{}/events",
            self.base_url.trim_end_matches('/'),
            self.calendar_id
        )
    }
}

/// Calendar provider reading from the Google Calendar v3 REST API.
pub struct GoogleCalendarProvider<T: TokenSource> {
    client: reqwest::Client,
    config: CalendarConfig,
    tokens: Arc<T>,
}

impl<T: TokenSource> GoogleCalendarProvider<T> {
    /// Creates a provider with a fresh HTTP client.
    #[must_use]
    pub fn new(config: CalendarConfig, tokens: Arc<T>) -> Self {
        Self::with_client(reqwest::Client::new(), config, tokens)
    }

    /// Creates a provider sharing an existing HTTP client.
    #[must_use]
    pub const fn with_client(
        client: reqwest::Client,
        config: CalendarConfig,
        tokens: Arc<T>,
    ) -> Self {
        Self {
            client,
            config,
            tokens,
        }
    }
}

#[async_trait]
impl<T: TokenSource> CalendarProvider for GoogleCalendarProvider<T> {
    async fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalendarProviderResult<Vec<Event>> {
        let token = self.tokens.refresh().await?;
        let time_min = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let time_max = end.to_rfc3339_opts(SecondsFormat::Secs, true);
        let max_results = self.config.max_results.to_string();

        let response = self
            .client
            .get(self.config.events_url())
            .bearer_auth(token.secret())
            .query(&[
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
                ("showDeleted", "false"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await
            .map_err(CalendarProviderError::request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                warn!(
                    status = status.as_u16(),
                    error = %err,
                    "could not read calendar error body"
                );
                String::new()
            });
            warn!(status = status.as_u16(), "calendar provider rejected event listing");
            return Err(CalendarProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(CalendarProviderError::request)?;
        let page: EventsPage =
            serde_json::from_slice(&bytes).map_err(CalendarProviderError::decode)?;

        let events: Vec<Event> = page.items.into_iter().filter_map(to_event).collect();
        debug!(
            count = events.len(),
            calendar_id = %self.config.calendar_id,
            "calendar events fetched"
        );
        Ok(events)
    }
}

#[derive(Debug, Deserialize)]
struct EventsPage {
    #[serde(default)]
    items: Vec<RemoteEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteEvent {
    id: String,
    status: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    start: Option<RemoteTime>,
    end: Option<RemoteTime>,
    hangout_link: Option<String>,
    conference_data: Option<ConferenceData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteTime {
    date_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceData {
    #[serde(default)]
    entry_points: Vec<EntryPoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryPoint {
    entry_point_type: Option<String>,
    uri: Option<String>,
}

impl RemoteEvent {
    fn conference_link(&self) -> Option<String> {
        let video = self.conference_data.as_ref().and_then(|data| {
            data.entry_points
                .iter()
                .find(|entry| entry.entry_point_type.as_deref() == Some("video"))
                .and_then(|entry| entry.uri.clone())
        });
        video.or_else(|| self.hangout_link.clone())
    }
}

fn to_event(remote: RemoteEvent) -> Option<Event> {
    if remote.status.as_deref() == Some("cancelled") {
        return None;
    }
    let Some(start) = remote.start.as_ref().and_then(|time| time.date_time) else {
        warn!(event_id = %remote.id, "skipping calendar event without a timed start");
        return None;
    };
    let id = match EventId::new(remote.id.clone()) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "skipping calendar event without an identifier");
            return None;
        }
    };

    let conference = remote.conference_link();
    let mut details = TaskDetails::new();
    details.title = remote.summary;
    details.description = remote.description;
    details.duration_minutes = remote
        .end
        .and_then(|time| time.date_time)
        .and_then(|end| i32::try_from((end - start).num_minutes()).ok());

    let created_at = remote.created.unwrap_or(start);
    let updated_at = remote.updated.unwrap_or(created_at);
    let event = Event::new(id, start, details).with_timestamps(created_at, updated_at);
    Some(match conference {
        Some(link) => event.with_conference(link),
        None => event,
    })
}
