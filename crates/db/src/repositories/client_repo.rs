//! Repository for the `clients` table.
//!
//! Reads assemble the full client tree (client -> projects -> requests)
//! with one query per level rather than a wide join.

use std::collections::HashMap;

use snapspace_core::error::CoreError;
use snapspace_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{is_unique_violation, RepoError};
use crate::models::client::{Client, ClientRow, CreateClient};
use crate::models::project::{Project, ProjectRow};
use crate::models::snapshot_request::SnapshotRequest;
use crate::repositories::project_repo::PROJECT_COLUMNS;
use crate::repositories::snapshot_request_repo::REQUEST_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Unique constraint guarding client names.
const UQ_CLIENT_NAME: &str = "uq_clients_name";

/// Provides create, list, and delete operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client with no projects.
    ///
    /// Fails with [`CoreError::Validation`] when the name is missing or empty
    /// and with [`CoreError::Conflict`] when the name is already taken.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, RepoError> {
        input.validate()?;
        let name = input.name.as_deref().unwrap_or_default();

        let query = format!("INSERT INTO clients (name) VALUES ($1) RETURNING {COLUMNS}");
        let row = sqlx::query_as::<_, ClientRow>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err, UQ_CLIENT_NAME) {
                    RepoError::Core(CoreError::Conflict(format!(
                        "A client named '{name}' already exists; client names must be unique"
                    )))
                } else {
                    RepoError::Database(err)
                }
            })?;

        Ok(Client::from_row(row, Vec::new()))
    }

    /// List every client with its projects and their requests, oldest first.
    ///
    /// Returns `None` when there are no clients at all, so callers can treat
    /// an empty collection as "not found" without inspecting the list.
    pub async fn list(pool: &PgPool) -> Result<Option<Vec<Client>>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        let clients = sqlx::query_as::<_, ClientRow>(&query)
            .fetch_all(pool)
            .await?;

        if clients.is_empty() {
            return Ok(None);
        }

        let client_ids: Vec<DbId> = clients.iter().map(|c| c.id).collect();

        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE client_id = ANY($1) ORDER BY id"
        );
        let projects = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&client_ids)
            .fetch_all(pool)
            .await?;

        let project_ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();

        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM snapshot_requests \
             WHERE project_id = ANY($1) \
             ORDER BY project_id, list_position"
        );
        let requests = sqlx::query_as::<_, SnapshotRequest>(&query)
            .bind(&project_ids)
            .fetch_all(pool)
            .await?;

        let mut requests_by_project: HashMap<DbId, Vec<SnapshotRequest>> = HashMap::new();
        for request in requests {
            requests_by_project
                .entry(request.project_id)
                .or_default()
                .push(request);
        }

        let mut projects_by_client: HashMap<DbId, Vec<Project>> = HashMap::new();
        for row in projects {
            let requests = requests_by_project.remove(&row.id).unwrap_or_default();
            projects_by_client
                .entry(row.client_id)
                .or_default()
                .push(Project::from_row(row, requests));
        }

        let clients = clients
            .into_iter()
            .map(|row| {
                let projects = projects_by_client.remove(&row.id).unwrap_or_default();
                Client::from_row(row, projects)
            })
            .collect();

        Ok(Some(clients))
    }

    /// Permanently delete a client and everything it owns.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
