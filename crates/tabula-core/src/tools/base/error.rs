//! Error types for tool operations

use crate::error::UnifiedError;
use std::time::Duration;

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Invalid arguments provided to the tool
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// No tool registered under the requested name
    #[error("Tool '{0}' not found")]
    NotFound(String),

    /// Tool ran past its execution budget
    #[error("Tool execution timed out after {0:?}")]
    Timeout(Duration),
}

impl UnifiedError for ToolError {
    fn error_code(&self) -> &str {
        match self {
            ToolError::InvalidArguments(_) => "TOOL_INVALID_ARGS",
            ToolError::ExecutionFailed(_) => "TOOL_EXEC_FAILED",
            ToolError::NotFound(_) => "TOOL_NOT_FOUND",
            ToolError::Timeout(_) => "TOOL_TIMEOUT",
        }
    }

    fn message(&self) -> &str {
        match self {
            ToolError::InvalidArguments(msg) => msg,
            ToolError::ExecutionFailed(msg) => msg,
            ToolError::NotFound(name) => name,
            ToolError::Timeout(_) => "Tool execution timed out",
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, ToolError::Timeout(_))
    }
}
