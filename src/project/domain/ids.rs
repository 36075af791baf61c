//! Identifier types for the project domain.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Unique identifier for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Ulid);

impl ProjectId {
    /// Creates a project identifier from an existing ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Returns the wrapped ULID.
    #[must_use]
    pub const fn into_inner(self) -> Ulid {
        self.0
    }
}

impl FromStr for ProjectId {
    type Err = ProjectDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(value.trim())
            .map(Self)
            .map_err(|_| ProjectDomainError::InvalidProjectId(value.to_owned()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
