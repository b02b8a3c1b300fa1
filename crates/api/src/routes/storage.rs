use axum::routing::get;
use axum::Router;

use crate::handlers::storage;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/signedAWSURL", get(storage::signed_url))
}
