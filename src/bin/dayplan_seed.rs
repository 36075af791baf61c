//! Seeds in-memory stores with generated projects, tasks, and events, then
//! prints today's timeline and the backlog as JSON.
//!
//! Usage:
//!
//! ```text
//! dayplan-seed [config-path] [task-count]
//! ```
//!
//! Without a config path the defaults apply. `task-count` defaults to 20 and
//! must lie within `1..=50`. Logs go to stderr, filtered by `RUST_LOG`.

use std::io::Write;
use std::sync::Arc;

use chrono::TimeDelta;
use dayplan::calendar::{
    adapters::memory::InMemoryCalendarProvider,
    domain::{CalendarDomainError, Event, EventId},
    ports::CalendarProviderError,
};
use dayplan::config::{ConfigError, DayplanConfig};
use dayplan::identity::MonotonicUlidGenerator;
use dayplan::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{ProjectDomainError, ProjectId},
    services::{ProjectService, ProjectServiceError, generator::generate_random_projects},
};
use dayplan::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDetails, TaskDomainError},
    services::{TaskLifecycleError, TaskLifecycleService, generator::generate_random_tasks},
};
use dayplan::telemetry::init_tracing;
use dayplan::timeline::services::{TimelineError, TimelineService};
use mockable::{Clock, DefaultClock};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;

const DEFAULT_TASK_COUNT: usize = 20;
const PROJECT_COUNT: usize = 3;
const TASKS_SCHEDULED_TODAY: usize = 3;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum SeedError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error(transparent)]
    TaskSeed(#[from] TaskDomainError),
    #[error(transparent)]
    ProjectSeed(#[from] ProjectDomainError),
    #[error(transparent)]
    EventSeed(#[from] CalendarDomainError),
    #[error(transparent)]
    Calendar(#[from] CalendarProviderError),
    #[error(transparent)]
    Tasks(#[from] TaskLifecycleError),
    #[error(transparent)]
    Projects(#[from] ProjectServiceError),
    #[error(transparent)]
    Timeline(#[from] TimelineError),
    #[error("failed to write output: {0}")]
    Output(#[source] serde_json::Error),
    #[error("failed to write output: {0}")]
    OutputIo(#[source] std::io::Error),
}

struct SeedArgs {
    config: DayplanConfig,
    task_count: usize,
}

#[derive(Serialize)]
struct SeedReport<'a> {
    timeline: &'a dayplan::timeline::domain::Timeline,
    backlog: &'a [dayplan::task::domain::Task],
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let args = parse_args(std::env::args().skip(1))?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(SeedError::RuntimeInit)?;
    runtime.block_on(run(args)).map_err(Into::into)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<SeedArgs, SeedError> {
    let config = match args.next() {
        Some(path) => DayplanConfig::load(path)?,
        None => DayplanConfig::default(),
    };
    let task_count = match args.next() {
        Some(raw) => raw
            .parse()
            .map_err(|_| SeedError::InvalidArgs(format!("task count '{raw}' is not a number")))?,
        None => DEFAULT_TASK_COUNT,
    };
    if args.next().is_some() {
        return Err(SeedError::InvalidArgs(
            "usage: dayplan-seed [config-path] [task-count]".to_owned(),
        ));
    }
    Ok(SeedArgs { config, task_count })
}

async fn run(args: SeedArgs) -> Result<(), SeedError> {
    let SeedArgs { config, task_count } = args;
    let zone = config.zone.day_zone()?;
    let clock = Arc::new(DefaultClock);
    let ids = Arc::new(MonotonicUlidGenerator::new());
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let project_store = Arc::new(InMemoryProjectRepository::new());
    let calendar = Arc::new(InMemoryCalendarProvider::new());
    let mut rng = rand::thread_rng();

    let projects = ProjectService::new(
        Arc::clone(&project_store),
        Arc::clone(&ids),
        Arc::clone(&clock),
    );
    let mut project_ids: Vec<ProjectId> = Vec::with_capacity(PROJECT_COUNT);
    for draft in generate_random_projects(PROJECT_COUNT, &mut rng)? {
        project_ids.push(projects.add_project(draft).await?.id());
    }

    let tasks = TaskLifecycleService::new(Arc::clone(&task_store), ids, Arc::clone(&clock))
        .with_policy(config.tasks)
        .with_zone(zone)
        .with_timeline(config.timeline);
    let now = clock.utc();
    let mut created = Vec::with_capacity(task_count);
    for generated in generate_random_tasks(task_count, now, &mut rng)? {
        let details = assign_project(generated, &project_ids, &mut rng);
        created.push(tasks.add_task(details).await?);
    }
    for task in created.iter().filter(|task| task.is_backlog()).take(TASKS_SCHEDULED_TODAY) {
        tasks.schedule_next_slot(task.id()).await?;
    }

    for (name, offset_hours) in [("Standup", 1), ("Design review", 3)] {
        let start = now + TimeDelta::hours(offset_hours);
        calendar.push(Event::new(
            EventId::new(name.to_lowercase().replace(' ', "-"))?,
            start,
            TaskDetails::new().with_title(name).with_duration(30),
        ))?;
    }

    let timeline = TimelineService::new(task_store, project_store, calendar, clock)
        .with_config(config.timeline)
        .with_zone(zone)
        .todays_timeline()
        .await?;
    let backlog = tasks.get_backlog_tasks().await?;
    info!(
        entries = timeline.len(),
        backlog = backlog.len(),
        "seeded demo data"
    );

    let report = SeedReport {
        timeline: &timeline,
        backlog: &backlog,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report).map_err(SeedError::Output)?;
    writeln!(out).map_err(SeedError::OutputIo)
}

fn assign_project(
    details: TaskDetails,
    projects: &[ProjectId],
    rng: &mut impl Rng,
) -> TaskDetails {
    if !rng.gen_bool(0.5) {
        return details;
    }
    match projects.choose(rng) {
        Some(project) => details.with_project(*project),
        None => details,
    }
}
