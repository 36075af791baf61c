//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub id: String,
    /// Optional title.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub title: Option<String>,
    /// Optional description.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub description: Option<String>,
    /// Scheduled start.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>)]
    pub start_time: Option<DateTime<Utc>>,
    /// Duration in minutes.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Int4>)]
    pub duration_minutes: Option<i32>,
    /// Completion flag.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Bool>)]
    pub completed: Option<bool>,
    /// Hidden flag.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Bool>)]
    pub hidden: Option<bool>,
    /// Manual rank.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Int4>)]
    pub rank: Option<i32>,
    /// Owning project identifier.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub project_id: Option<String>,
    /// Sync provenance.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Varchar>)]
    pub external_ref: Option<String>,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Optional title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Scheduled start.
    pub start_time: Option<DateTime<Utc>>,
    /// Duration in minutes.
    pub duration_minutes: Option<i32>,
    /// Completion flag.
    pub completed: Option<bool>,
    /// Hidden flag.
    pub hidden: Option<bool>,
    /// Manual rank.
    pub rank: Option<i32>,
    /// Owning project identifier.
    pub project_id: Option<String>,
    /// Sync provenance.
    pub external_ref: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Column-level update for task records.
///
/// An outer `None` skips the column; `Some(None)` writes `NULL`.
#[derive(Debug, Clone, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Title update.
    pub title: Option<Option<String>>,
    /// Description update.
    pub description: Option<Option<String>>,
    /// Start time update.
    pub start_time: Option<Option<DateTime<Utc>>>,
    /// Duration update.
    pub duration_minutes: Option<Option<i32>>,
    /// Completion flag update.
    pub completed: Option<Option<bool>>,
    /// Hidden flag update.
    pub hidden: Option<Option<bool>>,
    /// Rank update.
    pub rank: Option<Option<i32>>,
    /// Project update.
    pub project_id: Option<Option<String>>,
    /// External reference update.
    pub external_ref: Option<Option<String>>,
    /// Always written.
    pub updated_at: DateTime<Utc>,
}
