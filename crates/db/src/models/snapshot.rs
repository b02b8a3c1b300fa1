//! Snapshot entity model and DTOs.

use serde::{Deserialize, Serialize};
use snapspace_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `snapshots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: DbId,
    pub image_url: String,
    pub comment: String,
    pub request_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a captured image.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSnapshot {
    #[validate(
        required(message = "imageUrl is required"),
        url(message = "imageUrl must be a valid URL")
    )]
    pub image_url: Option<String>,
    #[validate(
        required(message = "comment is required"),
        length(min = 1, message = "comment must not be empty")
    )]
    pub comment: Option<String>,
    pub request_id: Option<String>,
}
