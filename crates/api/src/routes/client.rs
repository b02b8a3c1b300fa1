//! Route definitions for clients, their projects, and snapshot requests.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{client, snapshot_request};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/client", post(client::create))
        .route("/clients", get(client::list))
        .route("/client/{client_id}/project", post(client::create_project))
        .route(
            "/client/{client_id}/project/{project_id}/snapshotRequests",
            get(snapshot_request::list_active).post(snapshot_request::upsert),
        )
}
