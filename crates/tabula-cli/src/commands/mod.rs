//! CLI command implementations
//!
//! Each command prints its JSON result to stdout and reports whether the
//! operation succeeded.

pub mod call;
pub mod init;
pub mod request;
pub mod tools;
