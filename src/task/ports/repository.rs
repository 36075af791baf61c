//! Repository port for task persistence and day/backlog queries.

use crate::task::domain::{ExternalRef, Task, TaskFlag, TaskId, TaskPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every mutating call touches one record and completes as a single atomic
/// unit: concurrent callers on the same task never observe or produce a
/// half-applied change.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Finds the task imported from `reference`.
    ///
    /// Returns `None` when no task carries the reference. When several do,
    /// the one with the lowest identifier wins.
    async fn find_by_external_ref(
        &self,
        reference: &ExternalRef,
    ) -> TaskRepositoryResult<Option<Task>>;

    /// Writes only the supplied fields of `patch` and stamps `updated_at`.
    ///
    /// Returns the task as stored after the write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn apply_patch(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task>;

    /// Atomically flips a boolean flag (absent or `false` becomes `true`).
    ///
    /// Returns the task as stored after the write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn toggle(
        &self,
        id: TaskId,
        flag: TaskFlag,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns every task without a start time, in no particular order.
    async fn list_backlog(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task whose start lies in `[start, end)`, in no
    /// particular order.
    async fn list_scheduled_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
