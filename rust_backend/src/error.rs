//! Error types for analytics operations.

/// Result type for analytics operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Error type for analytics operations
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Invalid filter spec: {0}")]
    InvalidFilterSpec(String),

    #[error("Invalid group key: {0}")]
    InvalidGroupKey(String),
}
