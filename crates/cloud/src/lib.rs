//! Object storage integration.
//!
//! Handlers only see the [`UploadUrlSigner`] trait; [`s3::S3UploadSigner`]
//! is the production implementation backed by the AWS SDK.

pub mod config;
pub mod s3;

use async_trait::async_trait;

pub use config::StorageConfig;
pub use s3::S3UploadSigner;

/// Errors raised while producing a signed upload URL.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The requested lifetime cannot be expressed by the provider.
    #[error("Invalid presigning configuration: {0}")]
    Config(String),

    /// The provider refused or failed to sign the request.
    #[error("Failed to presign upload: {0}")]
    Presign(String),
}

/// Issues time-limited URLs that allow a client to upload one object
/// directly to storage.
#[async_trait]
pub trait UploadUrlSigner: Send + Sync {
    /// Return a URL permitting a single `PUT` of `object_key`.
    async fn presign_upload(&self, object_key: &str) -> Result<String, SigningError>;
}
