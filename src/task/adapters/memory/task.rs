//! In-memory task repository for tests and local runs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{ExternalRef, Task, TaskFlag, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Each mutation runs inside a single write-lock scope with no await point.
/// Listings come back in identifier order, matching the `PostgreSQL` adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<BTreeMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, BTreeMap<TaskId, Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, BTreeMap<TaskId, Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn mutate(
        &self,
        id: TaskId,
        change: impl FnOnce(&mut Task),
    ) -> TaskRepositoryResult<Task> {
        let mut tasks = self.write()?;
        let task = tasks.get_mut(&id).ok_or(TaskRepositoryError::NotFound(id))?;
        change(task);
        Ok(task.clone())
    }

    fn select(&self, predicate: impl Fn(&Task) -> bool) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read()?;
        Ok(tasks
            .values()
            .filter(|task| predicate(*task))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        if tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_by_external_ref(
        &self,
        reference: &ExternalRef,
    ) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks
            .values()
            .find(|task| task.details().external_ref.as_ref() == Some(reference))
            .cloned())
    }

    async fn apply_patch(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        self.mutate(id, |task| task.apply_patch(patch.clone(), updated_at))
    }

    async fn toggle(
        &self,
        id: TaskId,
        flag: TaskFlag,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        self.mutate(id, |task| task.toggle(flag, updated_at))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn list_backlog(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.select(Task::is_backlog)
    }

    async fn list_scheduled_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.select(|task| {
            task.start_time()
                .is_some_and(|instant| instant >= start && instant < end)
        })
    }
}
