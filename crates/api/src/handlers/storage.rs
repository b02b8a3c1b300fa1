//! Signed upload URL handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use snapspace_core::validation::object_key;

use crate::error::AppResult;
use crate::query::SignedUrlParams;
use crate::state::AppState;

/// Response body for `GET /signedAWSURL`.
#[derive(Debug, Serialize)]
pub struct SignedUrlResponse {
    #[serde(rename = "signedAWSURL")]
    pub signed_aws_url: String,
}

/// GET /signedAWSURL?imageFileName=<name>
pub async fn signed_url(
    State(state): State<AppState>,
    Query(params): Query<SignedUrlParams>,
) -> AppResult<Json<SignedUrlResponse>> {
    let key = object_key(params.image_file_name.as_deref())?;
    let signed_aws_url = state.signer.presign_upload(&key).await?;

    tracing::debug!(object_key = %key, "Issued signed upload URL");

    Ok(Json(SignedUrlResponse { signed_aws_url }))
}
