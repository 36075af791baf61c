//! Task aggregate root, its editable details, and partial updates.

use super::{ExternalRef, Field, TaskDomainError, TaskId};
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Editable fields of a task.
///
/// Every field is optional. `None` means absent, which is not the same as a
/// present zero: a task with no `start_time` sits in the backlog, and a task
/// with no `rank` sorts after every ranked task.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskDetails {
    /// Short title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Scheduled start; absent for backlog tasks.
    pub start_time: Option<DateTime<Utc>>,
    /// Planned length in minutes.
    pub duration_minutes: Option<i32>,
    /// Completion flag; absent reads as `false`.
    pub completed: Option<bool>,
    /// Visibility flag; absent reads as `false`.
    pub hidden: Option<bool>,
    /// Manual ordering tiebreak.
    pub rank: Option<i32>,
    /// Owning project, if any.
    pub project_id: Option<ProjectId>,
    /// Sync provenance for imported tasks.
    pub external_ref: Option<ExternalRef>,
}

impl TaskDetails {
    /// Creates empty details.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the scheduled start.
    #[must_use]
    pub const fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Sets the duration in minutes.
    #[must_use]
    pub const fn with_duration(mut self, minutes: i32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the hidden flag.
    #[must_use]
    pub const fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Sets the rank.
    #[must_use]
    pub const fn with_rank(mut self, rank: i32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Sets the owning project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the external reference.
    #[must_use]
    pub fn with_external_ref(mut self, external_ref: ExternalRef) -> Self {
        self.external_ref = Some(external_ref);
        self
    }

    /// Checks values that are invalid regardless of policy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NegativeDuration`] for negative durations.
    pub const fn validate(&self) -> Result<(), TaskDomainError> {
        if let Some(minutes) = self.duration_minutes
            && minutes < 0
        {
            return Err(TaskDomainError::NegativeDuration(minutes));
        }
        Ok(())
    }

    /// Returns whether a non-blank title is present.
    #[must_use]
    pub fn has_title(&self) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| !title.trim().is_empty())
    }

    /// Writes every supplied field of `patch` onto these details.
    pub fn apply(&mut self, patch: TaskPatch) {
        patch.title.apply_to(&mut self.title);
        patch.description.apply_to(&mut self.description);
        patch.start_time.apply_to(&mut self.start_time);
        patch.duration_minutes.apply_to(&mut self.duration_minutes);
        patch.completed.apply_to(&mut self.completed);
        patch.hidden.apply_to(&mut self.hidden);
        patch.rank.apply_to(&mut self.rank);
        patch.project_id.apply_to(&mut self.project_id);
        patch.external_ref.apply_to(&mut self.external_ref);
    }
}

/// Boolean task flags that can be flipped atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskFlag {
    /// The completion flag.
    Completed,
    /// The hidden flag.
    Hidden,
}

impl TaskFlag {
    /// Returns the storage column name of the flag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Hidden => "hidden",
        }
    }
}

/// A partial update: only fields that are not [`Field::Unset`] are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    /// New title.
    pub title: Field<String>,
    /// New description.
    pub description: Field<String>,
    /// New start; `Null` moves the task back to the backlog.
    pub start_time: Field<DateTime<Utc>>,
    /// New duration.
    pub duration_minutes: Field<i32>,
    /// New completion flag.
    pub completed: Field<bool>,
    /// New hidden flag.
    pub hidden: Field<bool>,
    /// New rank.
    pub rank: Field<i32>,
    /// New owning project.
    pub project_id: Field<ProjectId>,
    /// New external reference.
    pub external_ref: Field<ExternalRef>,
}

impl TaskPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch that only sets or clears the start time.
    #[must_use]
    pub fn schedule(start_time: Option<DateTime<Utc>>) -> Self {
        Self {
            start_time: Field::from(start_time),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Field::Value(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Field::Value(description.into());
        self
    }

    /// Sets the duration.
    #[must_use]
    pub const fn duration(mut self, minutes: i32) -> Self {
        self.duration_minutes = Field::Value(minutes);
        self
    }

    /// Sets the rank.
    #[must_use]
    pub const fn rank(mut self, rank: i32) -> Self {
        self.rank = Field::Value(rank);
        self
    }

    /// Sets the owning project.
    #[must_use]
    pub const fn project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Field::Value(project_id);
        self
    }

    /// Returns `true` when the patch supplies no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.start_time.is_unset()
            && self.duration_minutes.is_unset()
            && self.completed.is_unset()
            && self.hidden.is_unset()
            && self.rank.is_unset()
            && self.project_id.is_unset()
            && self.external_ref.is_unset()
    }

    /// Checks supplied values that are invalid regardless of policy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NegativeDuration`] for negative durations.
    pub const fn validate(&self) -> Result<(), TaskDomainError> {
        if let Field::Value(minutes) = self.duration_minutes
            && minutes < 0
        {
            return Err(TaskDomainError::NegativeDuration(minutes));
        }
        Ok(())
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    details: TaskDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted details.
    pub details: TaskDetails,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a system-assigned identifier.
    #[must_use]
    pub fn new(id: TaskId, details: TaskDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            details,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            details: data.details,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the editable details.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.details.title.as_deref()
    }

    /// Returns the scheduled start, if any.
    #[must_use]
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.details.start_time
    }

    /// Returns the duration in minutes, if any.
    #[must_use]
    pub const fn duration_minutes(&self) -> Option<i32> {
        self.details.duration_minutes
    }

    /// Returns the rank, if any.
    #[must_use]
    pub const fn rank(&self) -> Option<i32> {
        self.details.rank
    }

    /// Returns the owning project, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.details.project_id
    }

    /// Returns whether the task is completed; absent reads as `false`.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.details.completed.unwrap_or(false)
    }

    /// Returns whether the task is hidden; absent reads as `false`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.details.hidden.unwrap_or(false)
    }

    /// Returns the value of a boolean flag; absent reads as `false`.
    #[must_use]
    pub fn flag(&self, flag: TaskFlag) -> bool {
        match flag {
            TaskFlag::Completed => self.is_completed(),
            TaskFlag::Hidden => self.is_hidden(),
        }
    }

    /// Returns `true` when the task has no start time.
    #[must_use]
    pub const fn is_backlog(&self) -> bool {
        self.details.start_time.is_none()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update and stamps the modification time.
    pub fn apply_patch(&mut self, patch: TaskPatch, updated_at: DateTime<Utc>) {
        self.details.apply(patch);
        self.updated_at = updated_at;
    }

    /// Flips a boolean flag (absent or `false` becomes `true`) and stamps the
    /// modification time.
    pub fn toggle(&mut self, flag: TaskFlag, updated_at: DateTime<Utc>) {
        let next = !self.flag(flag);
        match flag {
            TaskFlag::Completed => self.details.completed = Some(next),
            TaskFlag::Hidden => self.details.hidden = Some(next),
        }
        self.updated_at = updated_at;
    }
}
