//! Configuration management for Tabula

mod env_loader;
mod file_loader;
mod logging_config;
mod store_config;

pub use env_loader::{apply_env_overrides, apply_process_env};
pub use file_loader::load_from_file;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

use crate::error::TabulaResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level Tabula configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabulaConfig {
    /// Backing store settings
    pub store: StoreConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl TabulaConfig {
    /// Validate every section
    pub fn validate(&self) -> TabulaResult<()> {
        self.store.validate()?;
        self.logging.validate()
    }
}

/// Load configuration from an optional file, then apply `TABULA_*`
/// environment overrides and validate the result.
pub fn load_config(path: Option<&Path>) -> TabulaResult<TabulaConfig> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => TabulaConfig::default(),
    };
    apply_process_env(&mut config)?;
    config.validate()?;
    Ok(config)
}
