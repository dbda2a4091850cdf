//! Store configuration

use crate::error::{TabulaError, TabulaResult};
use crate::tools::base::DEFAULT_TOOL_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default database file name
pub const DEFAULT_DB_PATH: &str = "agent_database.db";

/// Location and connection behaviour of the backing SQLite store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// How long a connection waits on a locked database before failing
    ///
    /// Must stay below the tool execution budget so a waiting write fails
    /// before its tool call is reported as timed out.
    #[serde(with = "humantime_serde")]
    pub busy_timeout: Duration,
    /// Whether to create the demonstration tables on startup
    pub bootstrap: bool,
    /// Record limit used by `query_table` when the caller gives none
    pub default_query_limit: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            busy_timeout: Duration::from_secs(5),
            bootstrap: true,
            default_query_limit: 10,
        }
    }
}

impl StoreConfig {
    /// Create a store config for the given database path
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    /// Set the busy timeout
    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Validate the store settings
    pub fn validate(&self) -> TabulaResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(TabulaError::config("store.db_path must not be empty"));
        }
        if self.default_query_limit <= 0 {
            return Err(TabulaError::config(format!(
                "store.default_query_limit must be positive, got {}",
                self.default_query_limit
            )));
        }
        if self.busy_timeout >= DEFAULT_TOOL_TIMEOUT {
            return Err(TabulaError::config(format!(
                "store.busy_timeout must be below the {:?} tool timeout, got {:?}",
                DEFAULT_TOOL_TIMEOUT, self.busy_timeout
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, PathBuf::from("agent_database.db"));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
        assert!(config.bootstrap);
        assert_eq!(config.default_query_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_store_config_rejects_empty_path() {
        let config = StoreConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_store_config_rejects_zero_limit() {
        let config = StoreConfig {
            default_query_limit: 0,
            ..StoreConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_query_limit"));
    }

    #[test]
    fn test_store_config_rejects_busy_timeout_at_tool_budget() {
        let config = StoreConfig::default().with_busy_timeout(DEFAULT_TOOL_TIMEOUT);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("busy_timeout"));

        let config = StoreConfig::default().with_busy_timeout(Duration::from_secs(29));
        assert!(config.validate().is_ok());
    }
}
