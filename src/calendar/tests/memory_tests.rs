//! Tests for the in-memory calendar provider.

use crate::calendar::{
    adapters::memory::InMemoryCalendarProvider,
    domain::{Event, EventId},
    ports::CalendarProvider,
};
use crate::task::domain::TaskDetails;
use crate::test_support::utc;
use rstest::rstest;

fn event(id: &str, hour: u32) -> Event {
    Event::new(
        EventId::new(id).expect("valid id"),
        utc(2025, 4, 7, hour, 0),
        TaskDetails::new().with_title(id),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lists_events_in_range_ordered_by_start() {
    let provider = InMemoryCalendarProvider::with_events(vec![
        event("late", 15),
        event("early", 8),
        event("tomorrow", 23),
    ]);

    let events = provider
        .list_events(utc(2025, 4, 7, 0, 0), utc(2025, 4, 7, 23, 0))
        .await
        .expect("listing succeeds");

    let ids: Vec<_> = events.iter().map(|item| item.id().as_str()).collect();
    assert_eq!(ids, ["early", "late"]);
    assert_eq!(provider.fetch_count(), 1);
}

#[test]
fn event_start_is_forced_into_details() {
    let start = utc(2025, 4, 7, 9, 0);
    let details = TaskDetails::new().with_start_time(utc(2020, 1, 1, 0, 0));

    let created = Event::new(EventId::new("e").expect("valid id"), start, details);

    assert_eq!(created.start(), start);
    assert_eq!(created.details().start_time, Some(start));
}

#[test]
fn blank_event_ids_are_rejected() {
    assert!(EventId::new("  ").is_err());
}
