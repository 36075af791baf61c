//! Pure assembly of a day's timeline from already-fetched inputs.

use crate::calendar::domain::Event;
use crate::project::domain::ProjectIndex;
use crate::task::domain::{Schedulable, Task, sort_scheduled};
use crate::timeline::domain::{
    DayZone, Timeline, TimelineConfig, TimelineEntry, TimelineItem,
};
use chrono::NaiveDate;

/// Builds the ordered timeline for `date`.
///
/// Inputs may be supersets of the day: tasks and events are re-filtered to
/// those starting on `date` in `zone`, and backlog tasks are dropped. Each
/// kept item gets a position and its project, looked up in `projects`.
/// Entries follow the day ordering; events carry no rank, so they follow
/// ranked tasks that start at the same instant.
#[must_use]
pub fn assemble_timeline(
    date: NaiveDate,
    tasks: Vec<Task>,
    events: Vec<Event>,
    projects: &ProjectIndex,
    config: &TimelineConfig,
    zone: &DayZone,
) -> Timeline {
    let items = tasks
        .into_iter()
        .map(TimelineItem::Task)
        .chain(events.into_iter().map(TimelineItem::Event));

    let mut entries: Vec<TimelineEntry> = items
        .filter_map(|item| {
            let start = item.start_time()?;
            if zone.date_of(start) != date {
                return None;
            }
            let position = config.compute_position(start, item.duration_minutes(), zone);
            let project = projects.resolve(item.project_id()).cloned();
            Some(TimelineEntry {
                item,
                position,
                project,
            })
        })
        .collect();

    sort_scheduled(&mut entries);
    Timeline::new(date, entries)
}
