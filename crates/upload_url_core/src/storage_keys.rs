use std::time::Duration;

use crate::config::UploadConfig;
use crate::contract::{
    CorrelationId, SigningRequest, SIGNED_URL_EXPIRY_SECS, UPLOAD_CONTENT_TYPE, UPLOAD_OBJECT_NAME,
};

pub fn upload_object_key(correlation_id: &CorrelationId) -> String {
    format!("{correlation_id}/{UPLOAD_OBJECT_NAME}")
}

pub fn signing_request(config: &UploadConfig, correlation_id: &CorrelationId) -> SigningRequest {
    SigningRequest {
        bucket: config.bucket.clone(),
        key: upload_object_key(correlation_id),
        content_type: UPLOAD_CONTENT_TYPE.to_string(),
        expires_in: Duration::from_secs(SIGNED_URL_EXPIRY_SECS),
    }
}
