//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use snapspace_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::snapshot_request::SnapshotRequest;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub client_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its ordered snapshot requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub snapshot_requests: Vec<SnapshotRequest>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    pub fn from_row(row: ProjectRow, snapshot_requests: Vec<SnapshotRequest>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            snapshot_requests,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for adding a project under a client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
}
