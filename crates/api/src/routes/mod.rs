pub mod client;
pub mod health;
pub mod snapshot;
pub mod storage;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// POST /client                                                create client
/// GET  /clients                                               list clients
/// POST /client/{client_id}/project                            add project
/// GET  /client/{client_id}/project/{project_id}/snapshotRequests   active requests
/// POST /client/{client_id}/project/{project_id}/snapshotRequests   upsert requests
///
/// POST /snapshot                                              record snapshot
/// GET  /snapshots                                             list snapshots
///
/// GET  /signedAWSURL?imageFileName=                           signed upload URL
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(client::router())
        .merge(snapshot::router())
        .merge(storage::router())
}
