//! Three-state field values for partial updates.

/// A field in a partial update.
///
/// `Unset` leaves the stored value alone, `Null` clears it, and `Value`
/// replaces it. Clearing and writing a zero are distinct operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// Not supplied; the stored value is kept.
    #[default]
    Unset,
    /// Supplied as empty; the stored value is cleared.
    Null,
    /// Supplied with a value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` when the field was not supplied.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the supplied value, if any.
    #[must_use]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unset | Self::Null => None,
        }
    }

    /// Writes this field onto a stored optional value.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Unset => {}
            Self::Null => *target = None,
            Self::Value(value) => *target = Some(value),
        }
    }

    /// Converts to the nested-option form used by column-level updates:
    /// `None` skips the column, `Some(None)` writes `NULL`.
    #[must_use]
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            Self::Unset => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }

    /// Maps the supplied value, preserving `Unset` and `Null`.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Unset => Field::Unset,
            Self::Null => Field::Null,
            Self::Value(value) => Field::Value(f(value)),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}
