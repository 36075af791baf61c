//! Timeline assembly: filtering, placement, ordering, and project lookup.

use crate::calendar::domain::{Event, EventId};
use crate::project::domain::{Project, ProjectDraft, ProjectId, ProjectIndex};
use crate::task::domain::{Task, TaskDetails, TaskId};
use crate::test_support::{FixedClock, utc};
use crate::timeline::domain::{DayZone, TimelineConfig, TimelineItem, TimelinePosition};
use crate::timeline::services::assemble_timeline;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use ulid::Ulid;

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at(2025, 4, 6, 20, 0)
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 7).expect("valid date")
}

fn task(clock: &FixedClock, title: &str, details: TaskDetails) -> Task {
    Task::new(
        TaskId::from_ulid(Ulid::new()),
        details.with_title(title),
        clock,
    )
}

fn event(id: &str, hour: u32, minute: u32, duration: i32) -> Event {
    Event::new(
        EventId::new(id).expect("valid id"),
        utc(2025, 4, 7, hour, minute),
        TaskDetails::new().with_title(id).with_duration(duration),
    )
}

fn titles(items: &crate::timeline::domain::Timeline) -> Vec<&str> {
    items
        .iter()
        .filter_map(|entry| entry.item.title())
        .collect()
}

#[rstest]
fn scheduled_task_lands_on_slot_fifteen(clock: FixedClock) {
    let write_spec = task(
        &clock,
        "Write spec",
        TaskDetails::new()
            .with_duration(30)
            .with_start_time(utc(2025, 4, 7, 9, 30)),
    );

    let timeline = assemble_timeline(
        day(),
        vec![write_spec],
        Vec::new(),
        &ProjectIndex::new(),
        &TimelineConfig::default(),
        &DayZone::utc(),
    );

    let entry = timeline.entries().first().expect("one entry");
    assert_eq!(entry.position, TimelinePosition { slot: 15, size: 2 });
    assert_eq!(timeline.date(), day());
}

#[rstest]
fn other_days_and_backlog_tasks_are_filtered_out(clock: FixedClock) {
    let tasks = vec![
        task(&clock, "backlog", TaskDetails::new()),
        task(
            &clock,
            "yesterday",
            TaskDetails::new().with_start_time(utc(2025, 4, 6, 23, 59)),
        ),
        task(
            &clock,
            "midnight",
            TaskDetails::new().with_start_time(utc(2025, 4, 7, 0, 0)),
        ),
        task(
            &clock,
            "tomorrow",
            TaskDetails::new().with_start_time(utc(2025, 4, 8, 0, 0)),
        ),
    ];

    let timeline = assemble_timeline(
        day(),
        tasks,
        Vec::new(),
        &ProjectIndex::new(),
        &TimelineConfig::default(),
        &DayZone::utc(),
    );

    assert_eq!(titles(&timeline), ["midnight"]);
}

#[rstest]
fn equal_starts_order_by_rank_then_duration(clock: FixedClock) {
    let start = utc(2025, 4, 7, 10, 0);
    let tasks = vec![
        task(&clock, "unranked", TaskDetails::new().with_start_time(start)),
        task(
            &clock,
            "rank 2",
            TaskDetails::new().with_start_time(start).with_rank(2),
        ),
        task(
            &clock,
            "rank 1 long",
            TaskDetails::new()
                .with_start_time(start)
                .with_rank(1)
                .with_duration(60),
        ),
        task(
            &clock,
            "rank 1 short",
            TaskDetails::new()
                .with_start_time(start)
                .with_rank(1)
                .with_duration(15),
        ),
    ];

    let timeline = assemble_timeline(
        day(),
        tasks,
        Vec::new(),
        &ProjectIndex::new(),
        &TimelineConfig::default(),
        &DayZone::utc(),
    );

    assert_eq!(
        titles(&timeline),
        ["rank 1 short", "rank 1 long", "rank 2", "unranked"]
    );
}

#[rstest]
fn events_merge_chronologically_after_ranked_tasks(clock: FixedClock) {
    let tasks = vec![
        task(
            &clock,
            "focus",
            TaskDetails::new()
                .with_start_time(utc(2025, 4, 7, 11, 0))
                .with_rank(1)
                .with_duration(60),
        ),
        task(
            &clock,
            "email",
            TaskDetails::new().with_start_time(utc(2025, 4, 7, 8, 0)),
        ),
    ];
    let events = vec![event("lunch", 12, 0, 45), event("sync", 11, 0, 30)];

    let timeline = assemble_timeline(
        day(),
        tasks,
        events,
        &ProjectIndex::new(),
        &TimelineConfig::default(),
        &DayZone::utc(),
    );

    assert_eq!(titles(&timeline), ["email", "focus", "sync", "lunch"]);
    let lunch = timeline.entries().get(3).expect("four entries");
    assert!(matches!(lunch.item, TimelineItem::Event(_)));
    assert_eq!(lunch.position, TimelinePosition { slot: 25, size: 3 });
}

#[rstest]
fn projects_resolve_and_dangling_references_yield_none(clock: FixedClock) {
    let garden = Project::new(
        ProjectId::from_ulid(Ulid::new()),
        ProjectDraft::new("Garden").expect("valid name"),
        &clock,
    );
    let deleted = ProjectId::from_ulid(Ulid::new());
    let start = utc(2025, 4, 7, 9, 0);
    let tasks = vec![
        task(
            &clock,
            "weed",
            TaskDetails::new()
                .with_start_time(start)
                .with_rank(1)
                .with_project(garden.id()),
        ),
        task(
            &clock,
            "orphan",
            TaskDetails::new()
                .with_start_time(start)
                .with_rank(2)
                .with_project(deleted),
        ),
    ];
    let index: ProjectIndex = std::iter::once(garden.clone()).collect();

    let timeline = assemble_timeline(
        day(),
        tasks,
        Vec::new(),
        &index,
        &TimelineConfig::default(),
        &DayZone::utc(),
    );

    let projects: Vec<_> = timeline.iter().map(|entry| entry.project.as_ref()).collect();
    assert_eq!(projects, [Some(&garden), None]);
}

#[rstest]
fn timeline_serializes_entries_with_their_kind(clock: FixedClock) {
    let timeline = assemble_timeline(
        day(),
        vec![task(
            &clock,
            "write",
            TaskDetails::new().with_start_time(utc(2025, 4, 7, 6, 0)),
        )],
        vec![event("standup", 9, 0, 15)],
        &ProjectIndex::new(),
        &TimelineConfig::default(),
        &DayZone::utc(),
    );

    let json = serde_json::to_value(&timeline).expect("timeline serializes");

    assert_eq!(json["date"], "2025-04-07");
    assert_eq!(json["entries"][0]["item"]["kind"], "task");
    assert_eq!(json["entries"][1]["item"]["kind"], "event");
    assert_eq!(json["entries"][1]["position"]["slot"], 13);
}
