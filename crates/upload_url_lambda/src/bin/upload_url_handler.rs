use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use upload_url_lambda::adapters::s3_signer::S3UrlSigner;
use upload_url_lambda::handlers::upload_url::{handle_upload_url_event, ApiGatewayResponse};
use upload_url_lambda::runtime::config::{ConfigError, UploadConfig};

struct RuntimeDependencies {
    config: Result<UploadConfig, ConfigError>,
    signer: S3UrlSigner,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_upload_url_event(&event.payload, deps.config.as_ref(), &deps.signer).await)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let config = UploadConfig::from_env();
    if let Err(error) = &config {
        // Invocations still answer with a 500 until the function is redeployed.
        warn!(error = %error, "upload URL handler started without bucket configuration");
    }

    let deps = RuntimeDependencies {
        config,
        signer: S3UrlSigner::new(aws_sdk_s3::Client::new(&aws_config)),
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
