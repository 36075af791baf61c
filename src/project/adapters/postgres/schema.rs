//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// ULID project identifier.
        #[max_length = 26]
        id -> Varchar,
        /// Display name.
        name -> Text,
        /// Canonical color name.
        #[max_length = 32]
        color -> Varchar,
        /// Canonical icon name.
        #[max_length = 32]
        icon -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
