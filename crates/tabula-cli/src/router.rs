//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use std::process::ExitCode;
use tabula_core::config::TabulaConfig;
use tabula_core::store::TableStore;

/// Route a parsed command to its handler
pub async fn route(cli: Cli, config: TabulaConfig) -> anyhow::Result<ExitCode> {
    let store = TableStore::new(config.store.clone());

    if config.store.bootstrap || cli.command == Commands::Init {
        store.bootstrap()?;
    }

    let succeeded = match cli.command {
        Commands::Init => commands::init::run(&store)?,
        Commands::Tools => commands::tools::show_tools(&store)?,
        Commands::Call { tool, args } => commands::call::run(store, &tool, &args).await?,
        Commands::Request { request } => commands::request::run(store, &request).await?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
