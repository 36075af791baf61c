//! Assembled timeline values.

use super::TimelinePosition;
use crate::calendar::domain::Event;
use crate::project::domain::{Project, ProjectId};
use crate::task::domain::{Schedulable, Task};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Something shown on the timeline: a local task or a provider event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TimelineItem {
    /// A locally owned task.
    Task(Task),
    /// A read-only calendar event.
    Event(Event),
}

impl TimelineItem {
    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Task(task) => task.title(),
            Self::Event(event) => event.title(),
        }
    }

    /// Returns the referenced project, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        match self {
            Self::Task(task) => task.details().project_id,
            Self::Event(event) => event.details().project_id,
        }
    }

    /// Returns the task, when the item is one.
    #[must_use]
    pub const fn as_task(&self) -> Option<&Task> {
        match self {
            Self::Task(task) => Some(task),
            Self::Event(_) => None,
        }
    }

    /// Returns the event, when the item is one.
    #[must_use]
    pub const fn as_event(&self) -> Option<&Event> {
        match self {
            Self::Task(_) => None,
            Self::Event(event) => Some(event),
        }
    }
}

impl Schedulable for TimelineItem {
    fn start_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Task(task) => Schedulable::start_time(task),
            Self::Event(event) => Schedulable::start_time(event),
        }
    }

    fn rank(&self) -> Option<i32> {
        match self {
            Self::Task(task) => Schedulable::rank(task),
            Self::Event(event) => Schedulable::rank(event),
        }
    }

    fn duration_minutes(&self) -> Option<i32> {
        match self {
            Self::Task(task) => Schedulable::duration_minutes(task),
            Self::Event(event) => Schedulable::duration_minutes(event),
        }
    }
}

/// One placed item with its resolved project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// The task or event.
    pub item: TimelineItem,
    /// Derived slot placement.
    pub position: TimelinePosition,
    /// Resolved project; `None` when the item has no project or the
    /// referenced project no longer exists.
    pub project: Option<Project>,
}

impl Schedulable for TimelineEntry {
    fn start_time(&self) -> Option<DateTime<Utc>> {
        self.item.start_time()
    }

    fn rank(&self) -> Option<i32> {
        self.item.rank()
    }

    fn duration_minutes(&self) -> Option<i32> {
        self.item.duration_minutes()
    }
}

/// Ordered, read-only view of one local day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    date: NaiveDate,
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates a timeline from entries that are already in day order.
    #[must_use]
    pub const fn new(date: NaiveDate, entries: Vec<TimelineEntry>) -> Self {
        Self { date, entries }
    }

    /// The local day shown.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Entries in day order.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is scheduled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in day order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
