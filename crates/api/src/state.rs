use std::sync::Arc;

use snapspace_cloud::UploadUrlSigner;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: snapspace_db::DbPool,
    /// Issues signed upload URLs for the object store.
    pub signer: Arc<dyn UploadUrlSigner>,
}
