//! Marquee CLI - command-line interface
//!
//! Provides one-shot catalog queries and the web UI server.

mod commands;

use std::path::Path;

use clap::Parser;
use marquee_core::tracing_setup::{self, CliLogLevel};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "A movie and TV search client")]
struct Cli {
    /// Console log level
    #[arg(long, global = true, default_value_t = CliLogLevel::Warn)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Server runs keep a full debug log on disk; one-shot queries
    // log to the console only.
    let logs_dir = matches!(cli.command, commands::Commands::Serve { .. })
        .then(|| Path::new("logs"));
    tracing_setup::init_tracing(cli.log_level.as_tracing_level(), logs_dir)?;

    commands::handle_command(cli.command).await?;

    Ok(())
}
