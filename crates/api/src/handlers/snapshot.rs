//! Handlers for the `/snapshot` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use snapspace_core::error::CoreError;
use snapspace_db::models::snapshot::{CreateSnapshot, Snapshot};
use snapspace_db::repositories::SnapshotRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /snapshot
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSnapshot>,
) -> AppResult<(StatusCode, Json<Snapshot>)> {
    let snapshot = SnapshotRepo::create(&state.pool, &input).await?;

    tracing::info!(
        snapshot_id = snapshot.id,
        request_id = ?snapshot.request_id,
        "Snapshot recorded",
    );

    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /snapshots
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Snapshot>>> {
    let snapshots = SnapshotRepo::list(&state.pool)
        .await?
        .ok_or(CoreError::Empty { entity: "snapshot" })?;
    Ok(Json(snapshots))
}
