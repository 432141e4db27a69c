//! fleetctl: manage Elastic Fleet through the Kibana Fleet API.
//!
//! Connection settings come from the `FLEET_*` environment variables (see
//! the `fleet-config` crate); each subcommand maps to one Fleet resource.

mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = fleet_config::Config::from_env()?;

    match cli.command {
        Command::AgentPolicy { command } => commands::agent_policy::run(&config, command).await,
        Command::PackagePolicy { command } => {
            commands::package_policy::run(&config, command).await
        }
        Command::Output { command } => commands::output::run(&config, command).await,
        Command::ServerHost { command } => commands::server_host::run(&config, command).await,
        Command::EnrollmentTokens { command } => {
            commands::enrollment_tokens::run(&config, command).await
        }
        Command::Package { command } => commands::package::run(&config, command).await,
    }
}
