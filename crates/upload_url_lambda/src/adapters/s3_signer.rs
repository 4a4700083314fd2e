use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::adapters::url_signer::{SigningError, UrlSigner};
use crate::runtime::contract::SigningRequest;

/// Signs GetObject requests with a client built once per process.
#[derive(Debug, Clone)]
pub struct S3UrlSigner {
    s3_client: aws_sdk_s3::Client,
}

impl S3UrlSigner {
    pub fn new(s3_client: aws_sdk_s3::Client) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl UrlSigner for S3UrlSigner {
    async fn presign_download(&self, request: &SigningRequest) -> Result<String, SigningError> {
        let presigning_config = PresigningConfig::expires_in(request.expires_in)
            .map_err(|error| SigningError::InvalidExpiry(error.to_string()))?;

        // GetObject has no content-type input, so `request.content_type` is not signed.
        let presigned = self
            .s3_client
            .get_object()
            .bucket(&request.bucket)
            .key(&request.key)
            .presigned(presigning_config)
            .await
            .map_err(|error| SigningError::Provider(DisplayErrorContext(&error).to_string()))?;

        Ok(presigned.uri().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

    use super::*;

    fn offline_signer() -> S3UrlSigner {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new(
                "AKIDEXAMPLE",
                "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
                None,
                None,
                "static",
            ))
            .build();
        S3UrlSigner::new(aws_sdk_s3::Client::from_conf(config))
    }

    fn pdf_request(expires_in: Duration) -> SigningRequest {
        SigningRequest {
            bucket: "my-bucket".to_string(),
            key: "0b6f4a38-3c5e-4c1f-9f0e-2f1d7a1b9c11/upload.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            expires_in,
        }
    }

    #[tokio::test]
    async fn signs_get_url_for_requested_object() {
        let url = offline_signer()
            .presign_download(&pdf_request(Duration::from_secs(60)))
            .await
            .expect("presigning with static credentials should succeed");

        assert!(url.starts_with("https://"), "unexpected url: {url}");
        assert!(url.contains("my-bucket"));
        assert!(url.contains("0b6f4a38-3c5e-4c1f-9f0e-2f1d7a1b9c11/upload.pdf"));
        assert!(url.contains("X-Amz-Expires=60"));
        assert!(url.contains("X-Amz-Signature="));
        assert!(!url.contains("response-content-type"));
    }

    #[tokio::test]
    async fn rejects_expiry_beyond_sigv4_limit() {
        let error = offline_signer()
            .presign_download(&pdf_request(Duration::from_secs(8 * 24 * 60 * 60)))
            .await
            .expect_err("expiry over one week should be rejected");

        assert!(matches!(error, SigningError::InvalidExpiry(_)));
    }
}
