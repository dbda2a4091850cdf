//! Environment variable-based configuration overrides

use super::TabulaConfig;
use crate::error::{TabulaError, TabulaResult};
use std::path::PathBuf;
use std::time::Duration;

/// Overrides the database path
pub const ENV_DB_PATH: &str = "TABULA_DB_PATH";
/// Overrides the busy timeout, in milliseconds
pub const ENV_BUSY_TIMEOUT_MS: &str = "TABULA_BUSY_TIMEOUT_MS";
/// Overrides the log level
pub const ENV_LOG_LEVEL: &str = "TABULA_LOG_LEVEL";

/// Apply `TABULA_*` overrides read from the process environment
pub fn apply_process_env(config: &mut TabulaConfig) -> TabulaResult<()> {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply `TABULA_*` overrides using `lookup` to read variables
pub fn apply_env_overrides<F>(config: &mut TabulaConfig, lookup: F) -> TabulaResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(db_path) = lookup(ENV_DB_PATH) {
        config.store.db_path = PathBuf::from(db_path);
    }

    if let Some(timeout_ms) = lookup(ENV_BUSY_TIMEOUT_MS) {
        let millis: u64 = timeout_ms.parse().map_err(|_| {
            TabulaError::config(format!("Invalid {} value '{}'", ENV_BUSY_TIMEOUT_MS, timeout_ms))
        })?;
        config.store.busy_timeout = Duration::from_millis(millis);
    }

    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("TABULA_DB_PATH", "/tmp/override.db"),
            ("TABULA_BUSY_TIMEOUT_MS", "1500"),
            ("TABULA_LOG_LEVEL", "trace"),
        ]);
        let mut config = TabulaConfig::default();
        apply_env_overrides(&mut config, |k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.store.db_path, PathBuf::from("/tmp/override.db"));
        assert_eq!(config.store.busy_timeout, Duration::from_millis(1500));
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_env_overrides_absent_keep_defaults() {
        let mut config = TabulaConfig::default();
        apply_env_overrides(&mut config, |_| None).unwrap();
        assert_eq!(config, TabulaConfig::default());
    }

    #[test]
    fn test_env_invalid_timeout() {
        let vars = env(&[("TABULA_BUSY_TIMEOUT_MS", "soon")]);
        let mut config = TabulaConfig::default();
        let err = apply_env_overrides(&mut config, |k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("TABULA_BUSY_TIMEOUT_MS"));
    }
}
