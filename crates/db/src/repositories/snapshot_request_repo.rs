//! Repository for the `snapshot_requests` table.

use snapspace_core::merge::{plan_merge, MergeStep};
use snapspace_core::snapshot_request::STATUS_ACTIVE;
use snapspace_core::types::DbId;
use sqlx::PgPool;
use validator::Validate;

use crate::error::RepoError;
use crate::models::snapshot_request::{SnapshotRequest, UpsertSnapshotRequest};
use crate::repositories::ProjectRepo;

/// Column list for the `snapshot_requests` table.
pub(crate) const REQUEST_COLUMNS: &str =
    "id, project_id, name, status, sequence, list_position, created_at, updated_at";

/// Provides the bulk upsert and active listing for a project's requests.
pub struct SnapshotRequestRepo;

impl SnapshotRequestRepo {
    /// Merge `input` into the project's request list by id.
    ///
    /// Entries naming an existing request of this project overwrite its
    /// `name`, `status` and `sequence`; all other entries are appended after
    /// the current last request. Requests not named in `input` are left
    /// untouched. Returns the written requests in input order.
    ///
    /// Runs in a single transaction holding the project row lock, so
    /// concurrent upserts to one project apply one after the other.
    pub async fn upsert(
        pool: &PgPool,
        client_id: DbId,
        project_id: DbId,
        input: &[UpsertSnapshotRequest],
    ) -> Result<Vec<SnapshotRequest>, RepoError> {
        for entry in input {
            entry.validate()?;
        }

        let mut tx = pool.begin().await?;

        ProjectRepo::resolve_owned(&mut tx, client_id, project_id, true).await?;

        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM snapshot_requests \
             WHERE project_id = $1 \
             ORDER BY list_position"
        );
        let existing = sqlx::query_as::<_, SnapshotRequest>(&query)
            .bind(project_id)
            .fetch_all(&mut *tx)
            .await?;

        let mut next_position = existing.last().map_or(0, |r| r.list_position + 1);

        let update_query = format!(
            "UPDATE snapshot_requests SET name = $3, status = $4, sequence = $5 \
             WHERE id = $1 AND project_id = $2 \
             RETURNING {REQUEST_COLUMNS}"
        );
        let insert_query = format!(
            "INSERT INTO snapshot_requests (project_id, name, status, sequence, list_position) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {REQUEST_COLUMNS}"
        );

        let mut saved = Vec::with_capacity(input.len());
        for step in plan_merge(&existing, input) {
            let request = match step {
                MergeStep::Update { id, incoming } => {
                    sqlx::query_as::<_, SnapshotRequest>(&update_query)
                        .bind(id)
                        .bind(project_id)
                        .bind(&incoming.name)
                        .bind(&incoming.status)
                        .bind(incoming.sequence)
                        .fetch_one(&mut *tx)
                        .await?
                }
                MergeStep::Append(incoming) => {
                    let row = sqlx::query_as::<_, SnapshotRequest>(&insert_query)
                        .bind(project_id)
                        .bind(&incoming.name)
                        .bind(&incoming.status)
                        .bind(incoming.sequence)
                        .bind(next_position)
                        .fetch_one(&mut *tx)
                        .await?;
                    next_position += 1;
                    row
                }
            };
            saved.push(request);
        }

        tx.commit().await?;

        tracing::debug!(
            client_id,
            project_id,
            written = saved.len(),
            "Snapshot requests upserted",
        );

        Ok(saved)
    }

    /// List the project's requests whose status is `active`, in list order.
    pub async fn list_active(
        pool: &PgPool,
        client_id: DbId,
        project_id: DbId,
    ) -> Result<Vec<SnapshotRequest>, RepoError> {
        let mut conn = pool.acquire().await?;

        ProjectRepo::resolve_owned(&mut conn, client_id, project_id, false).await?;

        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM snapshot_requests \
             WHERE project_id = $1 AND status = $2 \
             ORDER BY list_position"
        );
        let requests = sqlx::query_as::<_, SnapshotRequest>(&query)
            .bind(project_id)
            .bind(STATUS_ACTIVE)
            .fetch_all(&mut *conn)
            .await?;

        Ok(requests)
    }
}
