//! Handlers for clients and the projects they own.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use snapspace_core::error::CoreError;
use snapspace_db::models::client::{Client, CreateClient};
use snapspace_db::models::project::{CreateProject, Project};
use snapspace_db::repositories::{ClientRepo, ProjectRepo};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::handlers::path_id;
use crate::state::AppState;

/// POST /client
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = ClientRepo::create(&state.pool, &input).await?;

    tracing::info!(client_id = client.id, name = %client.name, "Client created");

    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /clients
///
/// An empty collection is reported as 404.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool)
        .await?
        .ok_or(CoreError::Empty { entity: "client" })?;
    Ok(Json(clients))
}

/// POST /client/{client_id}/project
pub async fn create_project(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let client_id = path_id("Client", &client_id)?;
    let project = ProjectRepo::create(&state.pool, client_id, &input).await?;

    tracing::info!(client_id, project_id = project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}
