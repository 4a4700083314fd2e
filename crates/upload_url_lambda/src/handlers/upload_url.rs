use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::adapters::url_signer::UrlSigner;
use crate::runtime::config::{ConfigError, UploadConfig};
use crate::runtime::contract::{
    CorrelationId, ErrorMessageBody, SignedUrlBody, HANDLER_OPERATION, MISSING_BUCKET_MESSAGE,
    SIGNING_FAILED_MESSAGE,
};
use crate::runtime::storage_keys::signing_request;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Issues a signed URL for `<correlation id>/upload.pdf` in the configured bucket.
///
/// The inbound event only triggers the invocation; none of its fields are read.
/// Every path yields a well-formed response, so the Lambda never reports an
/// invocation error.
pub async fn handle_upload_url_event(
    _event: &Value,
    config: Result<&UploadConfig, &ConfigError>,
    signer: &dyn UrlSigner,
) -> ApiGatewayResponse {
    let correlation_id = CorrelationId::generate();
    info!(
        correlation_id = %correlation_id,
        operation = HANDLER_OPERATION,
        "started"
    );

    let config = match config {
        Ok(value) => value,
        Err(config_error) => {
            error!(
                correlation_id = %correlation_id,
                operation = HANDLER_OPERATION,
                error = %config_error,
                "configuration missing"
            );
            return json_response(500, &ErrorMessageBody::new(MISSING_BUCKET_MESSAGE));
        }
    };

    let request = signing_request(config, &correlation_id);

    match signer.presign_download(&request).await {
        Ok(signed_url) => {
            info!(
                correlation_id = %correlation_id,
                operation = HANDLER_OPERATION,
                key = %request.key,
                "presigned URL generated"
            );
            json_response(200, &SignedUrlBody { signed_url })
        }
        Err(signing_error) => {
            error!(
                correlation_id = %correlation_id,
                operation = HANDLER_OPERATION,
                error = %signing_error,
                "error generating presigned URL"
            );
            json_response(500, &ErrorMessageBody::new(SIGNING_FAILED_MESSAGE))
        }
    }
}

fn json_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: json!({"Content-Type": "application/json"}),
            body,
        },
        Err(error) => {
            error!(operation = HANDLER_OPERATION, error = %error, "failed to serialize response");
            ApiGatewayResponse {
                status_code: 500,
                headers: json!({"Content-Type": "application/json"}),
                body: json!({"message": SIGNING_FAILED_MESSAGE}).to_string(),
            }
        }
    }
}
