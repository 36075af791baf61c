//! Domain model for tasks.
//!
//! Tasks carry optional fields with an explicit absent state, are updated
//! field by field, and are ordered one way in the backlog and another way on
//! a scheduled day. Infrastructure concerns stay outside this boundary.

mod error;
mod field;
mod form;
mod ids;
mod ordering;
mod task;

pub use error::TaskDomainError;
pub use field::Field;
pub use ids::{ExternalRef, TaskId};
pub use ordering::{
    Schedulable, compare_backlog, compare_present_first, compare_scheduled, sort_backlog,
    sort_scheduled,
};
pub use task::{PersistedTaskData, Task, TaskDetails, TaskFlag, TaskPatch};
