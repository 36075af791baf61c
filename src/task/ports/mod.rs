//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;
pub mod sync;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use sync::{RemoteTask, TaskSyncError, TaskSyncProvider, TaskSyncResult};

#[cfg(test)]
pub use sync::MockTaskSyncProvider;
