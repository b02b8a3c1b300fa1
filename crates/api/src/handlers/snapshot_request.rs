//! Handlers for snapshot requests nested under a client's project.

use axum::extract::{Path, State};
use axum::Json;
use snapspace_db::models::snapshot_request::{SnapshotRequest, UpsertSnapshotRequest};
use snapspace_db::repositories::SnapshotRequestRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::path_id;
use crate::state::AppState;

/// POST /client/{client_id}/project/{project_id}/snapshotRequests
///
/// Merges the body into the project's request list by id and returns the
/// written requests in body order.
pub async fn upsert(
    State(state): State<AppState>,
    Path((client_id, project_id)): Path<(String, String)>,
    AppJson(input): AppJson<Vec<UpsertSnapshotRequest>>,
) -> AppResult<Json<Vec<SnapshotRequest>>> {
    let client_id = path_id("Client", &client_id)?;
    let project_id = path_id("Project", &project_id)?;

    let saved = SnapshotRequestRepo::upsert(&state.pool, client_id, project_id, &input).await?;

    tracing::info!(client_id, project_id, count = saved.len(), "Snapshot requests saved");

    Ok(Json(saved))
}

/// GET /client/{client_id}/project/{project_id}/snapshotRequests
pub async fn list_active(
    State(state): State<AppState>,
    Path((client_id, project_id)): Path<(String, String)>,
) -> AppResult<Json<Vec<SnapshotRequest>>> {
    let client_id = path_id("Client", &client_id)?;
    let project_id = path_id("Project", &project_id)?;

    let requests = SnapshotRequestRepo::list_active(&state.pool, client_id, project_id).await?;
    Ok(Json(requests))
}
