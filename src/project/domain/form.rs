//! Mapping from submitted project forms to drafts.
//!
//! Recognised keys: `projectName`, `color` (defaults to `Zinc`), `icon`
//! (defaults to `Unknown`).

use super::{Color, Icon, ProjectDomainError, ProjectDraft};
use crate::form::{FormFields, FormValue};

impl ProjectDraft {
    /// Decodes a project draft from a submitted form.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the name is missing,
    /// or an unknown-color/icon error for values outside the palette.
    pub fn from_form(form: &FormFields) -> Result<Self, ProjectDomainError> {
        let name = match form.value("projectName") {
            FormValue::Text(text) => text,
            FormValue::Missing | FormValue::Blank => return Err(ProjectDomainError::EmptyName),
        };
        let color = match form.value("color") {
            FormValue::Text(text) => Color::try_from(text)?,
            FormValue::Missing | FormValue::Blank => Color::default(),
        };
        let icon = match form.value("icon") {
            FormValue::Text(text) => Icon::try_from(text)?,
            FormValue::Missing | FormValue::Blank => Icon::default(),
        };
        Ok(Self::new(name)?.with_color(color).with_icon(icon))
    }
}
