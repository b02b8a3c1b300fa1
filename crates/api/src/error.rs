use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use snapspace_cloud::SigningError;
use snapspace_core::error::CoreError;
use snapspace_db::error::RepoError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds infrastructure variants.
/// Implements [`IntoResponse`] to produce `{ "error": { "message", "code" } }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `snapspace_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The object store could not sign an upload URL.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The request body was not JSON of the expected shape.
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Core(core) => AppError::Core(core),
            RepoError::Database(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::Empty { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND")
                }
                CoreError::Validation(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
                }
                CoreError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Signing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SIGNING_ERROR"),
            AppError::Body(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
        };

        let message = match &self {
            // The domain error already carries a readable message; drop the
            // variant prefix that `Display` adds.
            AppError::Core(CoreError::Validation(msg) | CoreError::Conflict(msg)) => msg.clone(),
            AppError::Body(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let body = json!({
            "error": {
                "message": message,
                "code": code,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and error code.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_")) =>
        {
            (StatusCode::CONFLICT, "CONFLICT")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}
