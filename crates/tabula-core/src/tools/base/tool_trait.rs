//! Core Tool trait definition

use super::concurrency::ConcurrencyMode;
use super::error::ToolError;
use crate::tools::types::{ToolCall, ToolResult, ToolSchema};
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Execution budget a tool gets unless it overrides
/// [`Tool::max_execution_duration`]
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Base trait for all tools
///
/// Tools are the named operations an external agent invokes. Each tool has a
/// schema describing its arguments, a validation step and execution logic.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name (e.g., "query_table")
    fn name(&self) -> &str;

    /// Get the tool's description for LLM understanding
    fn description(&self) -> &str;

    /// Get the tool's JSON schema for input parameters
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if arguments are invalid or the execution
    /// machinery itself fails.
    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError>;

    /// Validate the tool call arguments
    ///
    /// Called before `execute()` to verify arguments are valid.
    /// Default implementation accepts all arguments.
    fn validate(&self, call: &ToolCall) -> Result<(), ToolError> {
        let _ = call;
        Ok(())
    }

    /// Get the concurrency mode (determines parallel execution)
    fn concurrency_mode(&self) -> ConcurrencyMode {
        ConcurrencyMode::Parallel
    }

    /// Get the maximum execution time; `None` runs without a deadline
    fn max_execution_duration(&self) -> Option<Duration> {
        Some(DEFAULT_TOOL_TIMEOUT)
    }

    /// Whether this tool only reads data without side effects
    fn is_read_only(&self) -> bool {
        false
    }

    /// Whether this tool can be called in parallel with other tools
    fn supports_parallel_execution(&self) -> bool {
        matches!(self.concurrency_mode(), ConcurrencyMode::Parallel)
    }

    /// Render the tool call for display to the user
    fn render_call(&self, call: &ToolCall) -> String {
        format!(
            "{}({})",
            self.name(),
            serde_json::to_string(&call.arguments).unwrap_or_default()
        )
    }

    /// Execute the tool with timing and error handling
    ///
    /// Wraps `execute()` with validation, timing measurement and error
    /// conversion. Always returns a `ToolResult`.
    async fn execute_with_timing(&self, call: &ToolCall) -> ToolResult {
        let start_time = Instant::now();

        if let Err(err) = self.validate(call) {
            return ToolResult::from_error(&call.id, self.name(), &err)
                .with_execution_time(start_time.elapsed().as_millis() as u64);
        }

        match self.execute(call).await {
            Ok(mut result) => {
                result.execution_time_ms = Some(start_time.elapsed().as_millis() as u64);
                result
            }
            Err(err) => ToolResult::from_error(&call.id, self.name(), &err)
                .with_execution_time(start_time.elapsed().as_millis() as u64),
        }
    }
}
