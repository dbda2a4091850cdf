//! Core error types and traits for Tabula

use thiserror::Error;

/// Result type alias for Tabula operations
pub type TabulaResult<T> = Result<T, TabulaError>;

/// Unified error trait that all Tabula errors implement.
///
/// - error_code(): Unique code for programmatic error identification
/// - message(): Human-readable error message
/// - context(): Optional additional context
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }

    /// Check if this error is retryable
    fn is_retryable(&self) -> bool {
        false
    }
}

/// Main error type for Tabula
///
/// Covers process-level faults (configuration and its files). Per-call
/// table operation faults never surface here; they become
/// [`crate::store::OperationResult`] failures instead.
#[derive(Error, Debug, Clone)]
pub enum TabulaError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors while reading configuration
    #[error("IO error: {message}")]
    Io { message: String, path: String },
}
