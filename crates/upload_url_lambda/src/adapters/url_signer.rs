use async_trait::async_trait;
use thiserror::Error;

use crate::runtime::contract::SigningRequest;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("invalid presigning expiry: {0}")]
    InvalidExpiry(String),
    #[error("storage provider failed to presign request: {0}")]
    Provider(String),
}

/// Object-store capability that issues time-limited URLs for retrieving a named object.
#[async_trait]
pub trait UrlSigner: Send + Sync {
    async fn presign_download(&self, request: &SigningRequest) -> Result<String, SigningError>;
}
