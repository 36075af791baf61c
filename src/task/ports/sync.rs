//! Port for importing tasks kept in an external task service.

use crate::calendar::ports::TokenSourceError;
use crate::task::domain::{ExternalRef, TaskDetails};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task sync provider operations.
pub type TaskSyncResult<T> = Result<T, TaskSyncError>;

/// A task as held by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTask {
    /// Remote identifier, kept as sync provenance.
    pub external_ref: ExternalRef,
    /// Remote title.
    pub title: Option<String>,
    /// Remote notes.
    pub notes: Option<String>,
    /// Whether the remote task is done.
    pub completed: bool,
    /// Position within the remote list.
    pub rank: Option<i32>,
}

impl RemoteTask {
    /// Creates a remote task with only its reference set.
    #[must_use]
    pub const fn new(external_ref: ExternalRef) -> Self {
        Self {
            external_ref,
            title: None,
            notes: None,
            completed: false,
            rank: None,
        }
    }

    /// Local details for a task first imported from this entry.
    #[must_use]
    pub fn to_details(&self) -> TaskDetails {
        TaskDetails {
            title: self.title.clone(),
            description: self.notes.clone(),
            completed: Some(self.completed),
            rank: self.rank,
            external_ref: Some(self.external_ref.clone()),
            ..TaskDetails::default()
        }
    }
}

/// Read-only source of remote tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskSyncProvider: Send + Sync {
    /// Lists the tasks of the default remote list, ordered by rank.
    async fn fetch_tasks(&self) -> TaskSyncResult<Vec<RemoteTask>>;
}

/// Errors returned by task sync providers.
#[derive(Debug, Clone, Error)]
pub enum TaskSyncError {
    /// The account has no task list to import from.
    #[error("no remote task list found")]
    NoTaskLists,

    /// The request could not be sent or the response not read.
    #[error("task sync request failed: {0}")]
    Request(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a non-success status.
    #[error("task sync provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("task sync response could not be decoded: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),

    /// No bearer token could be obtained.
    #[error(transparent)]
    Token(#[from] TokenSourceError),
}

impl TaskSyncError {
    /// Wraps a transport failure.
    pub fn request(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Request(Arc::new(err))
    }

    /// Wraps a decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
