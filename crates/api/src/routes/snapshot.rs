use axum::routing::{get, post};
use axum::Router;

use crate::handlers::snapshot;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/snapshot", post(snapshot::create))
        .route("/snapshots", get(snapshot::list))
}
