//! Mapping from submitted task forms to typed task values.
//!
//! Recognised keys: `title`, `description`, `startTime` (RFC 3339),
//! `duration` (minutes), `completed`, `hidden`, `rank`, `projectId`.

use super::{Field, TaskDetails, TaskDomainError, TaskPatch};
use crate::form::{FieldError, FormFields, FormValue, parse_bool, parse_i32, parse_timestamp};
use crate::project::domain::ProjectId;

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const START_TIME: &str = "startTime";
const DURATION: &str = "duration";
const COMPLETED: &str = "completed";
const HIDDEN: &str = "hidden";
const RANK: &str = "rank";
const PROJECT_ID: &str = "projectId";

fn decode<T>(
    form: &FormFields,
    key: &str,
    parse: impl FnOnce(&str, &str) -> Result<T, FieldError>,
) -> Result<Field<T>, FieldError> {
    match form.value(key) {
        FormValue::Missing => Ok(Field::Unset),
        FormValue::Blank => Ok(Field::Null),
        FormValue::Text(text) => parse(key, text).map(Field::Value),
    }
}

fn text(_: &str, value: &str) -> Result<String, FieldError> {
    Ok(value.to_owned())
}

fn project_id(field: &str, value: &str) -> Result<ProjectId, FieldError> {
    value
        .parse()
        .map_err(|_| FieldError::new(field, value, "expected a project identifier"))
}

impl TaskPatch {
    /// Decodes a partial update from a submitted form.
    ///
    /// Keys that were not submitted stay [`Field::Unset`]; blank keys become
    /// [`Field::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Field`] naming the first malformed field,
    /// or [`TaskDomainError::NegativeDuration`].
    pub fn from_form(form: &FormFields) -> Result<Self, TaskDomainError> {
        let patch = Self {
            title: decode(form, TITLE, text)?,
            description: decode(form, DESCRIPTION, text)?,
            start_time: decode(form, START_TIME, parse_timestamp)?,
            duration_minutes: decode(form, DURATION, parse_i32)?,
            completed: decode(form, COMPLETED, parse_bool)?,
            hidden: decode(form, HIDDEN, parse_bool)?,
            rank: decode(form, RANK, parse_i32)?,
            project_id: decode(form, PROJECT_ID, project_id)?,
            external_ref: Field::Unset,
        };
        patch.validate()?;
        Ok(patch)
    }
}

impl TaskDetails {
    /// Decodes the details of a new task from a submitted form.
    ///
    /// Missing and blank keys both leave the field absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Field`] naming the first malformed field,
    /// or [`TaskDomainError::NegativeDuration`].
    pub fn from_form(form: &FormFields) -> Result<Self, TaskDomainError> {
        let mut details = Self::new();
        details.apply(TaskPatch::from_form(form)?);
        Ok(details)
    }
}
