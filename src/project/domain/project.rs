//! Project aggregate and its editable fields.

use super::{Color, Icon, ProjectDomainError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Editable fields of a project, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    name: String,
    color: Color,
    icon: Icon,
}

impl ProjectDraft {
    /// Creates a draft with the default color and icon.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            color: Color::default(),
            icon: Icon::default(),
        })
    }

    /// Sets the color.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the icon.
    #[must_use]
    pub const fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the icon.
    #[must_use]
    pub const fn icon(&self) -> Icon {
        self.icon
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    color: Color,
    icon: Icon,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted color.
    pub color: Color,
    /// Persisted icon.
    pub icon: Icon,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project from a validated draft.
    #[must_use]
    pub fn new(id: ProjectId, draft: ProjectDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            name: draft.name,
            color: draft.color,
            icon: draft.icon,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            color: data.color,
            icon: data.icon,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the icon.
    #[must_use]
    pub const fn icon(&self) -> Icon {
        self.icon
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

    /// Replaces every editable field.
    pub fn revise(&mut self, draft: ProjectDraft, clock: &impl Clock) {
        self.name = draft.name;
        self.color = draft.color;
        self.icon = draft.icon;
        self.updated_at = clock.utc();
    }
}
