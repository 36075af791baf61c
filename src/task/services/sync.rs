//! Import of remote tasks into the local store.
//!
//! Tasks are matched on their [`ExternalRef`](crate::task::domain::ExternalRef).
//! A match has its remote-owned fields (title, description, completion, rank)
//! overwritten and keeps everything planned locally: start time, duration,
//! project, and the hidden flag. Unmatched remote tasks land in the backlog.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info};

use crate::identity::{IdGenerationError, IdGenerator};
use crate::task::{
    domain::{Field, Task, TaskId, TaskPatch},
    ports::{RemoteTask, TaskRepository, TaskRepositoryError, TaskSyncError, TaskSyncProvider},
};

/// Errors raised while importing remote tasks.
#[derive(Debug, Error)]
pub enum TaskImportError {
    /// The remote service could not be read.
    #[error(transparent)]
    Provider(#[from] TaskSyncError),

    /// No identifier could be assigned to a new task.
    #[error(transparent)]
    Identity(#[from] IdGenerationError),

    /// The repository failed.
    #[error("{operation} failed for {target}: {source}")]
    Storage {
        /// Operation that was running.
        operation: &'static str,
        /// Remote reference being imported.
        target: String,
        /// Underlying repository failure.
        #[source]
        source: TaskRepositoryError,
    },
}

impl TaskImportError {
    fn storage(operation: &'static str, remote: &RemoteTask, source: TaskRepositoryError) -> Self {
        Self::Storage {
            operation,
            target: format!("remote task {}", remote.external_ref),
            source,
        }
    }
}

/// Result type for task import operations.
pub type TaskImportResult<T> = Result<T, TaskImportError>;

/// Outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Local tasks created for previously unseen remote tasks.
    pub created: Vec<TaskId>,
    /// Local tasks refreshed from their remote counterpart.
    pub updated: Vec<TaskId>,
}

/// Imports remote tasks into a task repository.
#[derive(Clone)]
pub struct TaskSyncService<R, P, G, C>
where
    R: TaskRepository,
    P: TaskSyncProvider,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    provider: Arc<P>,
    ids: Arc<G>,
    clock: Arc<C>,
}

impl<R, P, G, C> TaskSyncService<R, P, G, C>
where
    R: TaskRepository,
    P: TaskSyncProvider,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates an import service.
    #[must_use]
    pub const fn new(repository: Arc<R>, provider: Arc<P>, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            provider,
            ids,
            clock,
        }
    }

    /// Fetches every remote task and upserts it by external reference.
    ///
    /// The run stops at the first failure; tasks written before it stay
    /// written, and rerunning the import picks up where it left off.
    ///
    /// # Errors
    ///
    /// Returns [`TaskImportError::Provider`] when the remote read fails and a
    /// storage error when the repository does.
    pub async fn import_tasks(&self) -> TaskImportResult<ImportReport> {
        let remote_tasks = self.provider.fetch_tasks().await?;
        let mut report = ImportReport::default();

        for remote in remote_tasks {
            let existing = self
                .repository
                .find_by_external_ref(&remote.external_ref)
                .await
                .map_err(|err| TaskImportError::storage("lookup", &remote, err))?;
            match existing {
                Some(task) => report.updated.push(self.refresh(&task, &remote).await?),
                None => report.created.push(self.create(&remote).await?),
            }
        }

        info!(
            created = report.created.len(),
            updated = report.updated.len(),
            "remote tasks imported"
        );
        Ok(report)
    }

    async fn create(&self, remote: &RemoteTask) -> TaskImportResult<TaskId> {
        let id = TaskId::from_ulid(self.ids.next_ulid()?);
        let task = Task::new(id, remote.to_details(), &*self.clock);
        self.repository
            .store(&task)
            .await
            .map_err(|err| TaskImportError::storage("import", remote, err))?;
        debug!(task_id = %id, external_ref = %remote.external_ref, "remote task created");
        Ok(id)
    }

    async fn refresh(&self, task: &Task, remote: &RemoteTask) -> TaskImportResult<TaskId> {
        let patch = TaskPatch {
            title: Field::from(remote.title.clone()),
            description: Field::from(remote.notes.clone()),
            completed: Field::Value(remote.completed),
            rank: Field::from(remote.rank),
            ..TaskPatch::default()
        };
        let updated = self
            .repository
            .apply_patch(task.id(), &patch, self.clock.utc())
            .await
            .map_err(|err| TaskImportError::storage("refresh", remote, err))?;
        debug!(
            task_id = %updated.id(),
            external_ref = %remote.external_ref,
            "remote task refreshed"
        );
        Ok(updated.id())
    }
}
