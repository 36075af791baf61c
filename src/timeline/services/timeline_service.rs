//! Query service that gathers a day's inputs and assembles its timeline.

use super::assemble_timeline;
use crate::calendar::ports::{CalendarProvider, CalendarProviderError};
use crate::project::domain::ProjectIndex;
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::timeline::domain::{DayWindowError, DayZone, Timeline, TimelineConfig};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned while building a timeline.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The requested day cannot be mapped onto instants.
    #[error(transparent)]
    Day(#[from] DayWindowError),

    /// Loading the day's tasks failed.
    #[error("loading tasks for {date} failed: {source}")]
    Tasks {
        /// Requested day.
        date: NaiveDate,
        /// Underlying repository failure.
        #[source]
        source: TaskRepositoryError,
    },

    /// Loading projects failed.
    #[error("loading projects failed: {0}")]
    Projects(#[source] ProjectRepositoryError),

    /// The calendar provider failed.
    #[error("fetching calendar events for {date} failed: {source}")]
    ExternalFetch {
        /// Requested day.
        date: NaiveDate,
        /// Underlying provider failure.
        #[source]
        source: CalendarProviderError,
    },
}

/// Result type for timeline queries.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Builds timelines from the task store, the project store, and a calendar.
#[derive(Clone)]
pub struct TimelineService<R, P, E, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    E: CalendarProvider,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    projects: Arc<P>,
    calendar: Arc<E>,
    clock: Arc<C>,
    config: TimelineConfig,
    zone: DayZone,
}

impl<R, P, E, C> TimelineService<R, P, E, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    E: CalendarProvider,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default timeline and local zone.
    #[must_use]
    pub fn new(tasks: Arc<R>, projects: Arc<P>, calendar: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            projects,
            calendar,
            clock,
            config: TimelineConfig::default(),
            zone: DayZone::default(),
        }
    }

    /// Replaces the timeline configuration.
    #[must_use]
    pub const fn with_config(mut self, config: TimelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the zone used for day boundaries and slots.
    #[must_use]
    pub const fn with_zone(mut self, zone: DayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Assembles the timeline of `date`.
    ///
    /// Tasks, events, and projects are fetched concurrently over the same
    /// local-day window, which spans 23 or 25 hours on DST transitions. The
    /// calendar is asked exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first failing source as [`TimelineError::Tasks`],
    /// [`TimelineError::Projects`], or [`TimelineError::ExternalFetch`].
    pub async fn timeline_for(&self, date: NaiveDate) -> TimelineResult<Timeline> {
        let window = self.zone.day_window(date)?;

        let tasks_fut = async {
            self.tasks
                .list_scheduled_between(window.start(), window.end())
                .await
                .map_err(|source| TimelineError::Tasks { date, source })
        };
        let events_fut = async {
            self.calendar
                .list_events(window.start(), window.end())
                .await
                .map_err(|source| {
                    warn!(%date, error = %source, "calendar fetch failed");
                    TimelineError::ExternalFetch { date, source }
                })
        };
        let projects_fut = async {
            self.projects
                .list_all()
                .await
                .map_err(TimelineError::Projects)
        };
        let (tasks, events, projects) = tokio::try_join!(tasks_fut, events_fut, projects_fut)?;

        let index: ProjectIndex = projects.into_iter().collect();
        let timeline = assemble_timeline(date, tasks, events, &index, &self.config, &self.zone);
        debug!(%date, entries = timeline.len(), "timeline assembled");
        Ok(timeline)
    }

    /// Assembles the timeline of the current local day.
    ///
    /// # Errors
    ///
    /// See [`Self::timeline_for`].
    pub async fn todays_timeline(&self) -> TimelineResult<Timeline> {
        let today = self.zone.date_of(self.clock.utc());
        self.timeline_for(today).await
    }
}
