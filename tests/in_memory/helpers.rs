//! Shared fixtures wiring every service onto in-memory adapters.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use dayplan::calendar::adapters::memory::InMemoryCalendarProvider;
use dayplan::identity::MonotonicUlidGenerator;
use dayplan::project::{adapters::memory::InMemoryProjectRepository, services::ProjectService};
use dayplan::task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService};
use dayplan::timeline::{domain::DayZone, services::TimelineService};
use mockable::Clock;
use rstest::fixture;

/// Clock pinned to an instant that tests can move forward.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    /// Creates a clock at `now`.
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        if let Ok(mut now) = self.now.lock() {
            *now += delta;
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.lock().map_or_else(|poisoned| *poisoned.into_inner(), |now| *now)
    }
}

/// Task service over in-memory storage.
pub type Tasks =
    TaskLifecycleService<InMemoryTaskRepository, MonotonicUlidGenerator, SteppingClock>;
/// Project service over in-memory storage.
pub type Projects =
    ProjectService<InMemoryProjectRepository, MonotonicUlidGenerator, SteppingClock>;
/// Timeline service over in-memory storage and calendar.
pub type Timelines = TimelineService<
    InMemoryTaskRepository,
    InMemoryProjectRepository,
    InMemoryCalendarProvider,
    SteppingClock,
>;

/// Every service plus the handles tests need to poke at directly.
pub struct Workspace {
    /// Task lifecycle service.
    pub tasks: Tasks,
    /// Project service.
    pub projects: Projects,
    /// Timeline service.
    pub timelines: Timelines,
    /// Calendar backing the timeline service.
    pub calendar: Arc<InMemoryCalendarProvider>,
    /// Shared clock.
    pub clock: Arc<SteppingClock>,
}

/// Builds a UTC instant from wall-clock parts.
///
/// # Panics
///
/// Panics if the parts do not form a valid timestamp.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

/// The day most tests plan: 2025-04-07.
///
/// # Panics
///
/// Never in practice; the date is a constant.
pub fn planning_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 7).expect("valid date")
}

/// Provides a workspace pinned to 08:00 UTC on [`planning_day`], with days
/// evaluated in UTC.
#[fixture]
pub fn workspace() -> Workspace {
    let clock = Arc::new(SteppingClock::new(utc(2025, 4, 7, 8, 0)));
    let ids = Arc::new(MonotonicUlidGenerator::new());
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let project_store = Arc::new(InMemoryProjectRepository::new());
    let calendar = Arc::new(InMemoryCalendarProvider::new());
    let zone = DayZone::utc();

    Workspace {
        tasks: TaskLifecycleService::new(
            Arc::clone(&task_store),
            Arc::clone(&ids),
            Arc::clone(&clock),
        )
        .with_zone(zone),
        projects: ProjectService::new(
            Arc::clone(&project_store),
            ids,
            Arc::clone(&clock),
        ),
        timelines: TimelineService::new(
            task_store,
            project_store,
            Arc::clone(&calendar),
            Arc::clone(&clock),
        )
        .with_zone(zone),
        calendar,
        clock,
    }
}
