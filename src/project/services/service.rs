//! CRUD orchestration for projects.

use crate::identity::{IdGenerationError, IdGenerator};
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectDraft, ProjectId, ProjectIndex},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// No project exists with the given identifier.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Input failed validation.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// No identifier could be assigned to a new project.
    #[error(transparent)]
    Identity(#[from] IdGenerationError),

    /// The repository failed.
    #[error("{operation} failed for {target}: {source}")]
    Storage {
        /// Operation that was running.
        operation: &'static str,
        /// Project or project set the operation addressed.
        target: String,
        /// Underlying repository failure.
        #[source]
        source: ProjectRepositoryError,
    },
}

impl ProjectServiceError {
    fn storage(operation: &'static str, id: ProjectId, source: ProjectRepositoryError) -> Self {
        match source {
            ProjectRepositoryError::NotFound(missing) => Self::NotFound(missing),
            other => Self::Storage {
                operation,
                target: format!("project {id}"),
                source: other,
            },
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project orchestration service.
#[derive(Clone)]
pub struct ProjectService<R, G, C>
where
    R: ProjectRepository,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ids: Arc<G>,
    clock: Arc<C>,
}

impl<R, G, C> ProjectService<R, G, C>
where
    R: ProjectRepository,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a project service.
    #[must_use]
    pub const fn new(repository: Arc<R>, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            repository,
            ids,
            clock,
        }
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns a storage error when persistence fails.
    pub async fn add_project(&self, draft: ProjectDraft) -> ProjectServiceResult<Project> {
        let id = ProjectId::from_ulid(self.ids.next_ulid()?);
        let project = Project::new(id, draft, &*self.clock);
        self.repository
            .store(&project)
            .await
            .map_err(|err| ProjectServiceError::storage("add", id, err))?;
        debug!(project_id = %id, name = project.name(), "project added");
        Ok(project)
    }

    /// Retrieves a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when no project has the ID.
    pub async fn get_project(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| ProjectServiceError::storage("get", id, err))?
            .ok_or(ProjectServiceError::NotFound(id))
    }

    /// Loads every project into an index.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the query fails.
    pub async fn list_projects(&self) -> ProjectServiceResult<ProjectIndex> {
        let projects =
            self.repository
                .list_all()
                .await
                .map_err(|source| ProjectServiceError::Storage {
                    operation: "list",
                    target: "all projects".to_owned(),
                    source,
                })?;
        Ok(projects.into_iter().collect())
    }

    /// Replaces the name, color, and icon of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when no project has the ID.
    pub async fn update_project(
        &self,
        id: ProjectId,
        draft: ProjectDraft,
    ) -> ProjectServiceResult<Project> {
        let mut project = self.get_project(id).await?;
        project.revise(draft, &*self.clock);
        self.repository
            .update(&project)
            .await
            .map_err(|err| ProjectServiceError::storage("update", id, err))?;
        debug!(project_id = %id, "project updated");
        Ok(project)
    }

    /// Deletes a project. Tasks that reference it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when no project has the ID.
    pub async fn delete_project(&self, id: ProjectId) -> ProjectServiceResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| ProjectServiceError::storage("delete", id, err))?;
        debug!(project_id = %id, "project deleted");
        Ok(())
    }
}
