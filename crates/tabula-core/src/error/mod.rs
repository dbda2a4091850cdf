//! Error types for Tabula
//!
//! This module provides the error handling shared by all Tabula crates.
//! Errors implement the `UnifiedError` trait which provides consistent fields:
//! - error_code: A unique identifier for programmatic error handling
//! - message: Human-readable error message
//! - context: Optional additional context about where/why the error occurred

mod constructors;
mod types;
mod unified_error;

pub use types::{TabulaError, TabulaResult, UnifiedError};
