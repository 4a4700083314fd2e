use thiserror::Error;

pub const BUCKET_NAME_ENV: &str = "S3_BUCKET_NAME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("S3_BUCKET_NAME is undefined")]
    MissingBucketName,
}

/// Process-wide handler configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    pub bucket: String,
}

impl UploadConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(BUCKET_NAME_ENV) {
            Some(bucket) if !bucket.trim().is_empty() => Ok(Self { bucket }),
            _ => Err(ConfigError::MissingBucketName),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_configured_bucket() {
        let config = UploadConfig::from_lookup(|key| {
            (key == BUCKET_NAME_ENV).then(|| "my-bucket".to_string())
        })
        .expect("bucket should load");

        assert_eq!(config.bucket, "my-bucket");
    }

    #[test]
    fn rejects_unset_bucket() {
        let error = UploadConfig::from_lookup(|_| None).expect_err("unset bucket should fail");
        assert_eq!(error, ConfigError::MissingBucketName);
        assert_eq!(error.to_string(), "S3_BUCKET_NAME is undefined");
    }

    #[test]
    fn rejects_blank_bucket() {
        for blank in ["", "   "] {
            let result = UploadConfig::from_lookup(|_| Some(blank.to_string()));
            assert_eq!(result, Err(ConfigError::MissingBucketName));
        }
    }
}
