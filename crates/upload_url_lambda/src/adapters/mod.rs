pub mod s3_signer;
pub mod url_signer;
