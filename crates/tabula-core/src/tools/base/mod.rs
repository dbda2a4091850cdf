//! Base trait and types for tools
//!
//! - [`Tool`] - The trait every table tool implements
//! - [`ToolError`] - Error types for tool call plumbing
//! - [`ConcurrencyMode`] - Control over parallel tool execution
//!
//! # Examples
//!
//! ```no_run
//! use tabula_core::tools::{Tool, ToolSchema};
//! use tabula_core::tools::base::ToolError;
//! use tabula_core::tools::types::{ToolCall, ToolResult};
//! use async_trait::async_trait;
//!
//! struct PingTool;
//!
//! #[async_trait]
//! impl Tool for PingTool {
//!     fn name(&self) -> &str { "ping" }
//!     fn description(&self) -> &str { "Replies with pong" }
//!     fn schema(&self) -> ToolSchema {
//!         ToolSchema::new(self.name(), self.description(), vec![])
//!     }
//!     async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
//!         Ok(ToolResult::success(&call.id, self.name(), "pong"))
//!     }
//! }
//! ```

pub mod concurrency;
pub mod error;
pub mod tool_trait;


pub use concurrency::ConcurrencyMode;
pub use error::ToolError;
pub use tool_trait::{DEFAULT_TOOL_TIMEOUT, Tool};
