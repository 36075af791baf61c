//! `PostgreSQL` adapters for task persistence.
//!
//! Partial updates are written as column-level `UPDATE ... SET` statements
//! and flag toggles as a single `NOT COALESCE(...)` statement, so each
//! mutation is atomic at the database.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTaskRepository, TaskPgPool};
