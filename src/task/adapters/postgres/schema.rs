//! Diesel schema for task persistence.

diesel::table! {
    /// Task records; every editable column is nullable.
    tasks (id) {
        /// ULID task identifier.
        #[max_length = 26]
        id -> Varchar,
        /// Optional title.
        title -> Nullable<Text>,
        /// Optional description.
        description -> Nullable<Text>,
        /// Scheduled start; `NULL` for backlog tasks.
        start_time -> Nullable<Timestamptz>,
        /// Planned length in minutes.
        duration_minutes -> Nullable<Int4>,
        /// Completion flag.
        completed -> Nullable<Bool>,
        /// Hidden flag.
        hidden -> Nullable<Bool>,
        /// Manual ordering tiebreak.
        rank -> Nullable<Int4>,
        /// Owning project identifier (not enforced as a foreign key).
        #[max_length = 26]
        project_id -> Nullable<Varchar>,
        /// Sync provenance.
        #[max_length = 255]
        external_ref -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
