//! Glossa - Entry Point
//!
//! Loads configuration, initializes logging on stderr, runs one command and
//! prints its JSON result on stdout.

// Force-link glossa-providers to ensure linkme registrations are included
extern crate glossa_providers;

use clap::Parser;
use glossa::cli::{Cli, run_command, startup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = startup(cli.config.as_deref())?;
    let output = run_command(&context, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
