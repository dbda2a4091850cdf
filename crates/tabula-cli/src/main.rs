//! Tabula CLI application
//!
//! Drives the table tools from the command line:
//!
//! ```bash
//! tabula init                                   # create the demo tables
//! tabula tools                                  # print every tool schema
//! tabula call query_table --args '{"table_name": "students"}'
//! tabula request '{"operation": "list_tables"}' # talk to the store directly
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr.

mod args;
mod commands;
mod logging;
mod router;

use clap::Parser;
use std::process::ExitCode;

pub use args::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    logging::init(&config.logging)?;

    router::route(cli, config).await
}
