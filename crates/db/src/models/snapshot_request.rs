//! Snapshot request model and the bulk upsert DTO.

use serde::{Deserialize, Serialize};
use snapspace_core::merge::Keyed;
use snapspace_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `snapshot_requests` table.
///
/// `list_position` orders requests within their project; it is internal
/// and never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRequest {
    pub id: DbId,
    #[serde(skip)]
    pub project_id: DbId,
    pub name: String,
    pub status: String,
    pub sequence: i32,
    #[serde(skip)]
    pub list_position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Keyed for SnapshotRequest {
    fn key(&self) -> Option<DbId> {
        Some(self.id)
    }
}

/// One entry of a bulk upsert body.
///
/// Entries carrying the id of an existing request update it in place;
/// entries without one (or with an unknown one) are appended.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertSnapshotRequest {
    #[serde(default, alias = "_id")]
    pub id: Option<DbId>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Free-form; only `active` and `deleted` carry meaning.
    pub status: String,
    pub sequence: i32,
}

impl Keyed for UpsertSnapshotRequest {
    fn key(&self) -> Option<DbId> {
        self.id
    }
}
