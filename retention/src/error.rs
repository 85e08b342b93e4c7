use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RetentionError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Scan error: {0}")]
    ScanError(String),
}

impl From<core_types::CoreTypeError> for RetentionError {
    fn from(err: core_types::CoreTypeError) -> Self {
        RetentionError::ConfigurationError(err.to_string())
    }
}
