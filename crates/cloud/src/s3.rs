//! S3 implementation of [`UploadUrlSigner`].

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;

use crate::config::StorageConfig;
use crate::{SigningError, UploadUrlSigner};

/// Signs `PutObject` requests against a single bucket.
pub struct S3UploadSigner {
    client: Client,
    config: StorageConfig,
}

impl S3UploadSigner {
    /// Build a signer using the default AWS credential provider chain
    /// (environment, profile, instance metadata) and the configured region.
    pub async fn from_config(config: StorageConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            expiry_secs = config.signed_url_expiry.as_secs(),
            "S3 upload signer configured",
        );

        Self::new(Client::new(&sdk_config), config)
    }

    /// Build a signer around an existing SDK client.
    pub fn new(client: Client, config: StorageConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl UploadUrlSigner for S3UploadSigner {
    async fn presign_upload(&self, object_key: &str) -> Result<String, SigningError> {
        let presigning = PresigningConfig::expires_in(self.config.signed_url_expiry)
            .map_err(|e| SigningError::Config(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(object_key)
            .set_content_type(self.config.upload_content_type.clone())
            .presigned(presigning)
            .await
            .map_err(|e| SigningError::Presign(e.to_string()))?;

        tracing::debug!(object_key, "Presigned upload URL issued");

        Ok(request.uri().to_string())
    }
}
