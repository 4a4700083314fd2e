use std::fmt;
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

pub const UPLOAD_CONTENT_TYPE: &str = "application/pdf";
pub const UPLOAD_OBJECT_NAME: &str = "upload.pdf";
pub const SIGNED_URL_EXPIRY_SECS: u64 = 60;
pub const HANDLER_OPERATION: &str = "data-ingestion.handler";

pub const MISSING_BUCKET_MESSAGE: &str = "Internal server error, missing S3_BUCKET_NAME.";
pub const SIGNING_FAILED_MESSAGE: &str = "Could not generate presigned URL.";

/// Per-invocation identifier attached to log lines. Never returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub expires_in: Duration,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SignedUrlBody {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorMessageBody {
    pub message: String,
}

impl ErrorMessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
