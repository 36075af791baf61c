//! Lookup table of projects by identifier.

use super::{Project, ProjectId};
use std::collections::HashMap;

/// Owning collection of projects keyed by identifier.
///
/// Lookups of unknown identifiers return `None`; callers render such items
/// without a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectIndex {
    projects: HashMap<ProjectId, Project>,
}

impl ProjectIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project, replacing any project with the same identifier.
    pub fn add(&mut self, project: Project) {
        self.projects.insert(project.id(), project);
    }

    /// Looks up a project.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Resolves an optional reference; absent or dangling references yield
    /// `None`.
    #[must_use]
    pub fn resolve(&self, id: Option<ProjectId>) -> Option<&Project> {
        id.and_then(|project_id| self.get(project_id))
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` when the index holds no project.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterates over identifier/project pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, &Project)> {
        self.projects.iter()
    }

    /// Iterates over projects in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }
}

impl FromIterator<Project> for ProjectIndex {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        let mut index = Self::new();
        for project in iter {
            index.add(project);
        }
        index
    }
}

impl Extend<Project> for ProjectIndex {
    fn extend<I: IntoIterator<Item = Project>>(&mut self, iter: I) {
        for project in iter {
            self.add(project);
        }
    }
}
