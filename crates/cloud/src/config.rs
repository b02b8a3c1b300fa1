use std::time::Duration;

/// Object storage settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Target bucket for uploads.
    pub bucket: String,
    /// AWS region of the bucket.
    pub region: String,
    /// Lifetime of each signed URL.
    pub signed_url_expiry: Duration,
    /// `Content-Type` the upload must be sent with, if constrained.
    pub upload_content_type: Option<String>,
}

impl StorageConfig {
    /// Load storage configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default          |
    /// |--------------------------|------------------|
    /// | `S3_BUCKET`              | `snapspace-dev`  |
    /// | `AWS_REGION`             | `eu-west-2`      |
    /// | `SIGNED_URL_EXPIRY_SECS` | `60`             |
    /// | `UPLOAD_CONTENT_TYPE`    | `image/jpeg`     |
    ///
    /// An empty `UPLOAD_CONTENT_TYPE` leaves the content type unconstrained.
    pub fn from_env() -> Self {
        let bucket = std::env::var("S3_BUCKET").unwrap_or_else(|_| "snapspace-dev".into());
        let region = std::env::var("AWS_REGION").unwrap_or_else(|_| "eu-west-2".into());

        let expiry_secs: u64 = std::env::var("SIGNED_URL_EXPIRY_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("SIGNED_URL_EXPIRY_SECS must be a valid u64");

        let upload_content_type = std::env::var("UPLOAD_CONTENT_TYPE")
            .unwrap_or_else(|_| "image/jpeg".into());
        let upload_content_type = Some(upload_content_type.trim().to_string()).filter(|s| !s.is_empty());

        Self {
            bucket,
            region,
            signed_url_expiry: Duration::from_secs(expiry_secs),
            upload_content_type,
        }
    }
}
