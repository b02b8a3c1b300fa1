//! Repository for the `projects` table.

use snapspace_core::error::CoreError;
use snapspace_core::types::DbId;
use sqlx::{PgConnection, PgPool};
use validator::Validate;

use crate::error::RepoError;
use crate::models::project::{CreateProject, Project, ProjectRow};

/// Column list for the `projects` table.
pub(crate) const PROJECT_COLUMNS: &str = "id, client_id, name, created_at, updated_at";

/// Provides creation and ownership lookups for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Add a project with no snapshot requests under an existing client.
    ///
    /// The insert only happens if the client exists, so a missing client is
    /// reported as [`CoreError::NotFound`] rather than a foreign key error.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, RepoError> {
        input.validate()?;
        let name = input.name.as_deref().unwrap_or_default();

        let query = format!(
            "INSERT INTO projects (client_id, name) \
             SELECT $1, $2 WHERE EXISTS (SELECT 1 FROM clients WHERE id = $1) \
             RETURNING {PROJECT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(client_id)
            .bind(name)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::not_found("Client", client_id))?;

        Ok(Project::from_row(row, Vec::new()))
    }

    /// Find a project only if it belongs to the given client.
    pub async fn find_for_client(
        pool: &PgPool,
        client_id: DbId,
        project_id: DbId,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 AND client_id = $2");
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(project_id)
            .bind(client_id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a client/project pair on an open connection.
    ///
    /// Reports which side of the pair is missing. With `lock` set, the
    /// project row is held `FOR UPDATE` until the surrounding transaction
    /// ends, serializing writers to the same project.
    pub async fn resolve_owned(
        conn: &mut PgConnection,
        client_id: DbId,
        project_id: DbId,
        lock: bool,
    ) -> Result<(), RepoError> {
        let (client_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                .bind(client_id)
                .fetch_one(&mut *conn)
                .await?;
        if !client_exists {
            return Err(CoreError::not_found("Client", client_id).into());
        }

        let query = if lock {
            "SELECT id FROM projects WHERE id = $1 AND client_id = $2 FOR UPDATE"
        } else {
            "SELECT id FROM projects WHERE id = $1 AND client_id = $2"
        };
        let found: Option<(DbId,)> = sqlx::query_as(query)
            .bind(project_id)
            .bind(client_id)
            .fetch_optional(&mut *conn)
            .await?;

        match found {
            Some(_) => Ok(()),
            None => Err(CoreError::not_found("Project", project_id).into()),
        }
    }
}
