//! Remote task import: upsert by external reference.

use std::sync::Arc;

use chrono::TimeDelta;
use rstest::{fixture, rstest};

use crate::identity::MonotonicUlidGenerator;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ExternalRef, TaskDetails},
    ports::{MockTaskSyncProvider, RemoteTask, TaskRepository, TaskSyncError},
    services::{TaskImportError, TaskLifecycleService, TaskSyncService},
};
use crate::test_support::{FixedClock, utc};
use crate::timeline::domain::DayZone;

type SyncService = TaskSyncService<
    InMemoryTaskRepository,
    MockTaskSyncProvider,
    MonotonicUlidGenerator,
    FixedClock,
>;

struct Harness {
    repository: Arc<InMemoryTaskRepository>,
    ids: Arc<MonotonicUlidGenerator>,
    clock: Arc<FixedClock>,
}

impl Harness {
    fn sync(&self, remote: Vec<RemoteTask>) -> SyncService {
        let mut provider = MockTaskSyncProvider::new();
        provider
            .expect_fetch_tasks()
            .times(1)
            .returning(move || Ok(remote.clone()));
        TaskSyncService::new(
            Arc::clone(&self.repository),
            Arc::new(provider),
            Arc::clone(&self.ids),
            Arc::clone(&self.clock),
        )
    }

    fn lifecycle(
        &self,
    ) -> TaskLifecycleService<InMemoryTaskRepository, MonotonicUlidGenerator, FixedClock> {
        TaskLifecycleService::new(
            Arc::clone(&self.repository),
            Arc::clone(&self.ids),
            Arc::clone(&self.clock),
        )
        .with_zone(DayZone::utc())
    }
}

#[fixture]
fn harness() -> Harness {
    Harness {
        repository: Arc::new(InMemoryTaskRepository::new()),
        ids: Arc::new(MonotonicUlidGenerator::new()),
        clock: Arc::new(FixedClock::at(2025, 4, 7, 8, 0)),
    }
}

fn remote(reference: &str, title: &str, rank: i32) -> RemoteTask {
    let mut task = RemoteTask::new(ExternalRef::new(reference).expect("valid reference"));
    task.title = Some(title.to_owned());
    task.rank = Some(rank);
    task
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_import_creates_backlog_tasks_with_provenance(harness: Harness) {
    let service = harness.sync(vec![
        remote("g-1", "Renew passport", 1),
        remote("g-2", "Call bank", 2),
    ]);

    let report = service.import_tasks().await.expect("import succeeds");

    assert_eq!(report.created.len(), 2);
    assert!(report.updated.is_empty());
    let backlog = harness
        .lifecycle()
        .get_backlog_tasks()
        .await
        .expect("backlog listing");
    let imported: Vec<_> = backlog
        .iter()
        .map(|task| {
            (
                task.title(),
                task.rank(),
                task.details().external_ref.as_ref().map(ExternalRef::as_str),
            )
        })
        .collect();
    assert_eq!(
        imported,
        [
            (Some("Renew passport"), Some(1), Some("g-1")),
            (Some("Call bank"), Some(2), Some("g-2")),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reimport_refreshes_remote_fields_and_keeps_local_planning(harness: Harness) {
    let first = harness
        .sync(vec![remote("g-1", "Renew passport", 1)])
        .import_tasks()
        .await
        .expect("first import");
    let id = *first.created.first().expect("one task created");
    let lifecycle = harness.lifecycle();
    lifecycle
        .schedule_task(id, Some(utc(2025, 4, 7, 10, 0)))
        .await
        .expect("task scheduled");
    harness.clock.advance(TimeDelta::minutes(5));

    let mut changed = remote("g-1", "Renew passport online", 4);
    changed.completed = true;
    let second = harness
        .sync(vec![changed])
        .import_tasks()
        .await
        .expect("second import");

    assert!(second.created.is_empty());
    assert_eq!(second.updated, [id]);
    let task = lifecycle.get_task(id).await.expect("task exists");
    assert_eq!(task.title(), Some("Renew passport online"));
    assert_eq!(task.rank(), Some(4));
    assert!(task.is_completed());
    assert_eq!(task.start_time(), Some(utc(2025, 4, 7, 10, 0)));
    assert_eq!(task.updated_at(), utc(2025, 4, 7, 8, 5));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn local_tasks_without_provenance_are_left_alone(harness: Harness) {
    let local = harness
        .lifecycle()
        .add_task(TaskDetails::new().with_title("Renew passport"))
        .await
        .expect("local task added");

    let report = harness
        .sync(vec![remote("g-1", "Renew passport", 1)])
        .import_tasks()
        .await
        .expect("import succeeds");

    assert_eq!(report.created.len(), 1);
    let untouched = harness
        .repository
        .find_by_id(local.id())
        .await
        .expect("lookup succeeds")
        .expect("local task kept");
    assert_eq!(untouched, local);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provider_failure_writes_nothing(harness: Harness) {
    let mut provider = MockTaskSyncProvider::new();
    provider
        .expect_fetch_tasks()
        .returning(|| Err(TaskSyncError::NoTaskLists));
    let service = TaskSyncService::new(
        Arc::clone(&harness.repository),
        Arc::new(provider),
        Arc::clone(&harness.ids),
        Arc::clone(&harness.clock),
    );

    let result = service.import_tasks().await;

    assert!(matches!(
        result,
        Err(TaskImportError::Provider(TaskSyncError::NoTaskLists))
    ));
    let backlog = harness.repository.list_backlog().await.expect("listing");
    assert!(backlog.is_empty());
}
