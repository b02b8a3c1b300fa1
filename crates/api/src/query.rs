//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /signedAWSURL`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUrlParams {
    pub image_file_name: Option<String>,
}
