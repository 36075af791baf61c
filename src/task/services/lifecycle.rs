//! Service layer for task creation, updates, scheduling, and day queries.

use crate::identity::{IdGenerationError, IdGenerator};
use crate::task::{
    domain::{
        Task, TaskDetails, TaskDomainError, TaskFlag, TaskId, TaskPatch, sort_backlog,
        sort_scheduled,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::timeline::domain::{DayWindowError, DayZone, TimelineConfig};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Validation rules applied to new and updated tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPolicy {
    /// Reject tasks without a non-blank title.
    pub require_title: bool,
}

impl TaskPolicy {
    /// Creates a policy that requires a title.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            require_title: true,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The requested day cannot be mapped onto instants.
    #[error(transparent)]
    Day(#[from] DayWindowError),

    /// No identifier could be assigned to a new task.
    #[error(transparent)]
    Identity(#[from] IdGenerationError),

    /// The repository failed.
    #[error("{operation} failed for {target}: {source}")]
    Storage {
        /// Operation that was running.
        operation: &'static str,
        /// Task or task set the operation addressed.
        target: String,
        /// Underlying repository failure.
        #[source]
        source: TaskRepositoryError,
    },
}

impl TaskLifecycleError {
    fn storage(operation: &'static str, id: TaskId, source: TaskRepositoryError) -> Self {
        match source {
            TaskRepositoryError::NotFound(missing) => Self::NotFound(missing),
            other => Self::Storage {
                operation,
                target: format!("task {id}"),
                source: other,
            },
        }
    }

    const fn query(operation: &'static str, target: String, source: TaskRepositoryError) -> Self {
        Self::Storage {
            operation,
            target,
            source,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, G, C>
where
    R: TaskRepository,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ids: Arc<G>,
    clock: Arc<C>,
    policy: TaskPolicy,
    zone: DayZone,
    timeline: TimelineConfig,
}

impl<R, G, C> TaskLifecycleService<R, G, C>
where
    R: TaskRepository,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default policy, local zone, and timeline.
    #[must_use]
    pub fn new(repository: Arc<R>, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            ids,
            clock,
            policy: TaskPolicy::default(),
            zone: DayZone::default(),
            timeline: TimelineConfig::default(),
        }
    }

    /// Replaces the validation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: TaskPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the zone used for day boundaries.
    #[must_use]
    pub const fn with_zone(mut self, zone: DayZone) -> Self {
        self.zone = zone;
        self
    }

    /// Replaces the timeline configuration used for slot scheduling.
    #[must_use]
    pub const fn with_timeline(mut self, timeline: TimelineConfig) -> Self {
        self.timeline = timeline;
        self
    }

    /// Creates a task, assigning it a new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the details violate
    /// the policy, or a storage error when persistence fails.
    pub async fn add_task(&self, details: TaskDetails) -> TaskLifecycleResult<Task> {
        details.validate()?;
        if self.policy.require_title && !details.has_title() {
            return Err(TaskDomainError::MissingTitle.into());
        }

        let id = TaskId::from_ulid(self.ids.next_ulid()?);
        let task = Task::new(id, details, &*self.clock);
        self.repository
            .store(&task)
            .await
            .map_err(|err| TaskLifecycleError::storage("add", id, err))?;
        debug!(task_id = %id, backlog = task.is_backlog(), "task added");
        Ok(task)
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the ID.
    pub async fn get_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| TaskLifecycleError::storage("get", id, err))?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Applies the supplied fields of `patch`, leaving all others untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the ID and
    /// [`TaskLifecycleError::Validation`] for invalid values.
    pub async fn update_task(&self, id: TaskId, patch: TaskPatch) -> TaskLifecycleResult<Task> {
        patch.validate()?;
        let clears_title = !patch.title.is_unset()
            && patch
                .title
                .as_value()
                .is_none_or(|title| title.trim().is_empty());
        if self.policy.require_title && clears_title {
            return Err(TaskDomainError::MissingTitle.into());
        }
        if patch.is_empty() {
            return self.get_task(id).await;
        }

        let updated = self
            .repository
            .apply_patch(id, &patch, self.clock.utc())
            .await
            .map_err(|err| TaskLifecycleError::storage("update", id, err))?;
        debug!(task_id = %id, "task updated");
        Ok(updated)
    }

    /// Deletes a task. Nothing else is removed with it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the ID.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| TaskLifecycleError::storage("delete", id, err))?;
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Flips the completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the ID.
    pub async fn complete_toggle(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.toggle(id, TaskFlag::Completed).await
    }

    /// Flips the hidden flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the ID.
    pub async fn hidden_toggle(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.toggle(id, TaskFlag::Hidden).await
    }

    async fn toggle(&self, id: TaskId, flag: TaskFlag) -> TaskLifecycleResult<Task> {
        let toggled = self
            .repository
            .toggle(id, flag, self.clock.utc())
            .await
            .map_err(|err| TaskLifecycleError::storage("toggle", id, err))?;
        debug!(
            task_id = %id,
            flag = flag.as_str(),
            value = toggled.flag(flag),
            "task flag toggled"
        );
        Ok(toggled)
    }

    /// Sets the start time, or clears it to return the task to the backlog.
    /// No other field is written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the ID.
    pub async fn schedule_task(
        &self,
        id: TaskId,
        start_time: Option<DateTime<Utc>>,
    ) -> TaskLifecycleResult<Task> {
        let scheduled = self
            .repository
            .apply_patch(id, &TaskPatch::schedule(start_time), self.clock.utc())
            .await
            .map_err(|err| TaskLifecycleError::storage("schedule", id, err))?;
        debug!(task_id = %id, start_time = ?start_time, "task schedule changed");
        Ok(scheduled)
    }

    /// Schedules a task at the start of the slot after the current one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the ID.
    pub async fn schedule_next_slot(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let now = self.clock.utc();
        let start = self.timeline.next_slot_start(now).unwrap_or(now);
        self.schedule_task(id, Some(start)).await
    }

    /// Returns every unscheduled task in backlog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the repository query fails.
    pub async fn get_backlog_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        let mut tasks = self
            .repository
            .list_backlog()
            .await
            .map_err(|err| TaskLifecycleError::query("list", "backlog".to_owned(), err))?;
        sort_backlog(&mut tasks);
        Ok(tasks)
    }

    /// Returns tasks starting on the local day `date`, in day order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Day`] when the date cannot be mapped
    /// onto instants, or a storage error when the query fails.
    pub async fn get_tasks_scheduled_on_date(
        &self,
        date: NaiveDate,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let window = self.zone.day_window(date)?;
        let mut tasks = self
            .repository
            .list_scheduled_between(window.start(), window.end())
            .await
            .map_err(|err| TaskLifecycleError::query("list", format!("tasks on {date}"), err))?;
        tasks.retain(|task| task.start_time().is_some_and(|start| window.contains(start)));
        sort_scheduled(&mut tasks);
        Ok(tasks)
    }

    /// Returns tasks scheduled on the current local day.
    ///
    /// # Errors
    ///
    /// See [`Self::get_tasks_scheduled_on_date`].
    pub async fn get_todays_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        let today = self.zone.date_of(self.clock.utc());
        self.get_tasks_scheduled_on_date(today).await
    }
}
