//! Error types for the access core.

/// Result type for access operations.
pub type Result<T> = std::result::Result<T, AccessError>;

/// Errors raised by feature-access resolution and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// Section name has no entry in the requirement table
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Feature name outside the known feature set
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// Role name outside the known UI role set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Session lifetime is not positive or overflows the calendar
    #[error("Invalid session lifetime: {0}")]
    InvalidTtl(String),

    /// Section table could not be parsed
    #[error("Invalid section config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Section table file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
