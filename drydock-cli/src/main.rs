//! Drydock CLI - Command-line interface
//!
//! Provides command-line access to the Drydock file manager.

mod commands;

use clap::Parser;
use drydock_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "drydock")]
#[command(about = "A self-hosted site asset manager")]
struct Cli {
    /// Console log verbosity
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), None)?;

    commands::handle_command(cli.command).await?;

    Ok(())
}
