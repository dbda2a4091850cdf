//! Logging configuration

use crate::error::{TabulaError, TabulaResult};
use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Merge with another logging config; empty strings do not override
    pub fn merge(&mut self, other: LoggingConfig) {
        if !other.level.is_empty() {
            self.level = other.level;
        }
        if !other.format.is_empty() {
            self.format = other.format;
        }
    }

    /// Validate level and format names
    pub fn validate(&self) -> TabulaResult<()> {
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(TabulaError::config(format!(
                "Unknown log level '{}'",
                self.level
            )));
        }
        if !FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(TabulaError::config(format!(
                "Unknown log format '{}'",
                self.format
            )));
        }
        Ok(())
    }
}
