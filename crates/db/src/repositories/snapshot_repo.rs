//! Repository for the `snapshots` table.

use sqlx::PgPool;
use validator::Validate;

use crate::error::RepoError;
use crate::models::snapshot::{CreateSnapshot, Snapshot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, image_url, comment, request_id, created_at, updated_at";

/// Provides create and list operations for snapshots.
pub struct SnapshotRepo;

impl SnapshotRepo {
    /// Validate and insert a snapshot, returning the stored row.
    ///
    /// `imageUrl` must be a well-formed URL and `comment` non-empty; every
    /// failing field is reported in one [`CoreError::Validation`].
    ///
    /// [`CoreError::Validation`]: snapspace_core::error::CoreError::Validation
    pub async fn create(pool: &PgPool, input: &CreateSnapshot) -> Result<Snapshot, RepoError> {
        input.validate()?;

        let query = format!(
            "INSERT INTO snapshots (image_url, comment, request_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let snapshot = sqlx::query_as::<_, Snapshot>(&query)
            .bind(&input.image_url)
            .bind(&input.comment)
            .bind(&input.request_id)
            .fetch_one(pool)
            .await?;
        Ok(snapshot)
    }

    /// List every snapshot, oldest first.
    ///
    /// Returns `None` when the collection is empty.
    pub async fn list(pool: &PgPool) -> Result<Option<Vec<Snapshot>>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM snapshots ORDER BY id");
        let snapshots = sqlx::query_as::<_, Snapshot>(&query)
            .fetch_all(pool)
            .await?;
        Ok(Some(snapshots).filter(|s| !s.is_empty()))
    }
}
