//! Shared upload-URL domain primitives.
//!
//! This crate owns configuration validation, object key derivation, and the
//! request/response contracts of the upload URL handler. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod config;
pub mod contract;
pub mod storage_keys;
