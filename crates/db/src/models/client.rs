//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use snapspace_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

use crate::models::project::Project;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A client together with the projects it owns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub projects: Vec<Project>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Client {
    pub fn from_row(row: ClientRow, projects: Vec<Project>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            projects,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
}
