//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{
        ExternalRef, PersistedTaskData, Task, TaskDetails, TaskFlag, TaskId, TaskPatch,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the storage adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

const TOGGLE_COMPLETED_SQL: &str = concat!(
    "UPDATE tasks SET completed = NOT COALESCE(completed, FALSE), updated_at = $2 ",
    "WHERE id = $1 RETURNING *",
);

const TOGGLE_HIDDEN_SQL: &str = concat!(
    "UPDATE tasks SET hidden = NOT COALESCE(hidden, FALSE), updated_at = $2 ",
    "WHERE id = $1 RETURNING *",
);

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.to_string())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_external_ref(
        &self,
        reference: &ExternalRef,
    ) -> TaskRepositoryResult<Option<Task>> {
        let raw = reference.to_string();
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::external_ref.eq(raw))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn apply_patch(
        &self,
        id: TaskId,
        patch: &TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        let changeset = to_changeset(patch.clone(), updated_at);
        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.find(id.to_string()))
                .set(&changeset)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn toggle(
        &self,
        id: TaskId,
        flag: TaskFlag,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task> {
        let statement = match flag {
            TaskFlag::Completed => TOGGLE_COMPLETED_SQL,
            TaskFlag::Hidden => TOGGLE_HIDDEN_SQL,
        };
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(statement)
                .bind::<diesel::sql_types::Varchar, _>(id.to_string())
                .bind::<diesel::sql_types::Timestamptz, _>(updated_at)
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?
                .ok_or(TaskRepositoryError::NotFound(id))?;
            row_to_task(row)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.find(id.to_string()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list_backlog(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .filter(tasks::start_time.is_null())
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_scheduled_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::start_time.ge(start))
                .filter(tasks::start_time.lt(end))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    let details = task.details().clone();
    NewTaskRow {
        id: task.id().to_string(),
        title: details.title,
        description: details.description,
        start_time: details.start_time,
        duration_minutes: details.duration_minutes,
        completed: details.completed,
        hidden: details.hidden,
        rank: details.rank,
        project_id: details.project_id.map(|id| id.to_string()),
        external_ref: details.external_ref.map(|reference| reference.to_string()),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(patch: TaskPatch, updated_at: DateTime<Utc>) -> TaskChangeset {
    TaskChangeset {
        title: patch.title.into_update(),
        description: patch.description.into_update(),
        start_time: patch.start_time.into_update(),
        duration_minutes: patch.duration_minutes.into_update(),
        completed: patch.completed.into_update(),
        hidden: patch.hidden.into_update(),
        rank: patch.rank.into_update(),
        project_id: patch.project_id.map(|id| id.to_string()).into_update(),
        external_ref: patch
            .external_ref
            .map(|reference| reference.to_string())
            .into_update(),
        updated_at,
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        start_time,
        duration_minutes,
        completed,
        hidden,
        rank,
        project_id,
        external_ref,
        created_at,
        updated_at,
    } = row;

    let task_id = id
        .parse::<TaskId>()
        .map_err(TaskRepositoryError::persistence)?;
    let project = project_id
        .map(|raw| raw.parse::<ProjectId>())
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;
    let reference = external_ref
        .map(ExternalRef::new)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: task_id,
        details: TaskDetails {
            title,
            description,
            start_time,
            duration_minutes,
            completed,
            hidden,
            rank,
            project_id: project,
            external_ref: reference,
        },
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
