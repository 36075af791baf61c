//! Application services for task lifecycle orchestration and import.

pub mod generator;
mod lifecycle;
mod sync;

pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService, TaskPolicy};
pub use sync::{ImportReport, TaskImportError, TaskImportResult, TaskSyncService};
