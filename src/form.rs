//! Generic key/value form input and field decoders.
//!
//! Presentation adapters hand submitted forms to the domain as
//! [`FormFields`]. Each entity maps the fields it understands by hand; there
//! is no reflection-driven binding. A key missing from the form means "not
//! supplied", while a key present with a blank value means "cleared".

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

/// A form field that failed to decode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid value '{value}' for field '{field}': {reason}")]
pub struct FieldError {
    /// Form key that failed.
    pub field: String,
    /// Raw submitted value.
    pub value: String,
    /// Why the value was rejected.
    pub reason: &'static str,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: &str, value: &str, reason: &'static str) -> Self {
        Self {
            field: field.to_owned(),
            value: value.to_owned(),
            reason,
        }
    }
}

/// Submitted state of one form key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormValue<'a> {
    /// The key was not submitted.
    Missing,
    /// The key was submitted blank.
    Blank,
    /// The key was submitted with non-blank text (trimmed).
    Text(&'a str),
}

/// Decoded form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: BTreeMap<String, String>,
}

impl FormFields {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Classifies the submitted value of `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> FormValue<'_> {
        match self.fields.get(key).map(|raw| raw.trim()) {
            None => FormValue::Missing,
            Some("") => FormValue::Blank,
            Some(text) => FormValue::Text(text),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Parses an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns [`FieldError`] when the text is not RFC 3339.
pub fn parse_timestamp(field: &str, text: &str) -> Result<DateTime<Utc>, FieldError> {
    DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| FieldError::new(field, text, "expected an RFC 3339 timestamp"))
}

/// Parses a signed 32-bit integer.
///
/// # Errors
///
/// Returns [`FieldError`] when the text is not an integer in range.
pub fn parse_i32(field: &str, text: &str) -> Result<i32, FieldError> {
    text.parse()
        .map_err(|_| FieldError::new(field, text, "expected an integer"))
}

/// Parses a checkbox-style boolean (`true`/`false`, `on`/`off`, `1`/`0`).
///
/// # Errors
///
/// Returns [`FieldError`] for any other text.
pub fn parse_bool(field: &str, text: &str) -> Result<bool, FieldError> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" => Ok(false),
        _ => Err(FieldError::new(field, text, "expected a boolean")),
    }
}
