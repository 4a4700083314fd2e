//! AWS-oriented adapters and the Lambda handler for issuing signed upload URLs.
//!
//! This crate owns runtime integration details (the API Gateway handler and the
//! S3 signing adapter) and re-exports the core crate as `runtime` so handlers
//! and binaries share one module boundary for config, contract, and key
//! primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime {
    pub use upload_url_core::{config, contract, storage_keys};
}
