//! Tabula Core Library
//!
//! This crate provides the core functionality for Tabula: the table store
//! facade over SQLite, the tool primitives agents invoke it through, and
//! configuration and error handling shared by the other crates.

pub mod config;
pub mod error;
pub mod store;
pub mod tools;

// Re-export commonly used types
pub use config::{LoggingConfig, StoreConfig, TabulaConfig};
pub use error::{TabulaError, TabulaResult, UnifiedError};
pub use store::{OperationResult, TableRequest, TableStore};
pub use tools::{Tool, ToolCall, ToolError, ToolExecutor, ToolResult, ToolSchema};
