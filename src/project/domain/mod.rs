//! Domain model for projects: labelled, colored groupings of tasks.

mod error;
mod form;
mod ids;
mod index;
mod palette;
mod project;

pub use error::ProjectDomainError;
pub use ids::ProjectId;
pub use index::ProjectIndex;
pub use palette::{Color, Icon};
pub use project::{PersistedProjectData, Project, ProjectDraft};
