//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{ProjectRecord, ProjectRow},
    schema::projects,
};
use crate::project::{
    domain::{Color, Icon, PersistedProjectData, Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the project adapter.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let record = to_record(project);

        self.run_blocking(move |connection| {
            diesel::insert_into(projects::table)
                .values(&record)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectRepositoryError::DuplicateProject(project_id)
                    }
                    _ => ProjectRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.to_string())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let record = to_record(project);

        self.run_blocking(move |connection| {
            let updated = diesel::update(projects::table.find(project_id.to_string()))
                .set(&record)
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProjectRepositoryError::NotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(projects::table.find(id.to_string()))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(ProjectRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .order(projects::id.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }
}

fn to_record(project: &Project) -> ProjectRecord {
    ProjectRecord {
        id: project.id().to_string(),
        name: project.name().to_owned(),
        color: project.color().as_str().to_owned(),
        icon: project.icon().as_str().to_owned(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let id = row
        .id
        .parse::<ProjectId>()
        .map_err(ProjectRepositoryError::persistence)?;
    let color = Color::try_from(row.color).map_err(ProjectRepositoryError::persistence)?;
    let icon = Icon::try_from(row.icon).map_err(ProjectRepositoryError::persistence)?;
    Ok(Project::from_persisted(PersistedProjectData {
        id,
        name: row.name,
        color,
        icon,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::{ProjectRow, row_to_project, to_record};
    use crate::project::domain::{Color, Icon, Project, ProjectDraft, ProjectId};
    use mockable::DefaultClock;
    use ulid::Ulid;

    fn sample_project() -> Project {
        let draft = ProjectDraft::new("Garden")
            .expect("valid name")
            .with_color(Color::Emerald)
            .with_icon(Icon::Snail);
        Project::new(ProjectId::from_ulid(Ulid::new()), draft, &DefaultClock)
    }

    fn row_from(record: super::ProjectRecord) -> ProjectRow {
        ProjectRow {
            id: record.id,
            name: record.name,
            color: record.color,
            icon: record.icon,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    #[test]
    fn record_stores_canonical_palette_names() {
        let record = to_record(&sample_project());

        assert_eq!(record.color, "Emerald");
        assert_eq!(record.icon, "Snail");
    }

    #[test]
    fn row_converts_back_to_the_same_project() {
        let project = sample_project();

        let restored = row_to_project(row_from(to_record(&project))).expect("row should convert");

        assert_eq!(restored, project);
    }

    #[test]
    fn unknown_color_in_storage_is_a_persistence_error() {
        let mut record = to_record(&sample_project());
        record.color = "Mauve".to_owned();

        assert!(row_to_project(row_from(record)).is_err());
    }
}
