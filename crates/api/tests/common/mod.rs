//! Shared helpers for API integration tests.
//!
//! Each test binary pulls in the subset it needs.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use snapspace_api::config::ServerConfig;
use snapspace_api::router::build_app_router;
use snapspace_api::state::AppState;
use snapspace_cloud::{SigningError, StorageConfig, UploadUrlSigner};

/// Signer that fabricates a URL shaped like an S3 presigned `PUT`.
pub struct FakeSigner;

#[async_trait]
impl UploadUrlSigner for FakeSigner {
    async fn presign_upload(&self, object_key: &str) -> Result<String, SigningError> {
        Ok(format!(
            "https://snapspace-dev.s3.eu-west-2.amazonaws.com/{object_key}\
             ?X-Amz-Expires=60&X-Amz-Signature=deadbeef"
        ))
    }
}

/// Signer that always fails, as when credentials are unavailable.
pub struct FailingSigner;

#[async_trait]
impl UploadUrlSigner for FailingSigner {
    async fn presign_upload(&self, _object_key: &str) -> Result<String, SigningError> {
        Err(SigningError::Presign("no credentials in provider chain".into()))
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        storage: StorageConfig {
            bucket: "snapspace-dev".to_string(),
            region: "eu-west-2".to_string(),
            signed_url_expiry: Duration::from_secs(60),
            upload_content_type: Some("image/jpeg".to_string()),
        },
    }
}

/// Build the full application router over `pool` with a [`FakeSigner`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_signer(pool, Arc::new(FakeSigner))
}

/// Build the full application router with a caller-supplied signer.
pub fn build_test_app_with_signer(pool: PgPool, signer: Arc<dyn UploadUrlSigner>) -> Router {
    build_app_router(AppState { pool, signer }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST `body` verbatim with an optional content type.
pub async fn post_raw(app: Router, uri: &str, content_type: Option<&str>, body: &str) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Whether the response declares a JSON body.
pub fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}
