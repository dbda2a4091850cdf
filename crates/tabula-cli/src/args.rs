//! CLI argument definitions using clap

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabula_core::config::{TabulaConfig, load_config};

#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(about = "Tabula - generic table operations over SQLite, exposed as agent tools")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(long, short, global = true, env = "TABULA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database file, overrides the configured path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log level, overrides the configured level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the demonstration tables and list every table
    Init,

    /// Print the JSON schema of every table tool
    Tools,

    /// Invoke one tool with JSON arguments
    Call {
        /// Tool name, e.g. insert_to_table
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, short, default_value = "{}")]
        args: String,
    },

    /// Run one raw store request, e.g. '{"operation": "list_tables"}'
    Request {
        /// Request as JSON, tagged by "operation"
        request: String,
    },
}

impl Cli {
    /// Load the configuration and apply command-line overrides
    pub fn resolve_config(&self) -> anyhow::Result<TabulaConfig> {
        let mut config = load_config(self.config.as_deref()).with_context(|| {
            match &self.config {
                Some(path) => format!("failed to load configuration from {}", path.display()),
                None => "failed to load configuration".to_string(),
            }
        })?;

        if let Some(db) = &self.db {
            config.store.db_path = db.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        config.validate()?;
        Ok(config)
    }
}
