//! Command implementations, one module per Fleet resource.

pub mod agent_policy;
pub mod enrollment_tokens;
pub mod output;
pub mod package;
pub mod package_policy;
pub mod server_host;

use anyhow::Result;
use fleet_client::{FleetClient, FleetClientBuilder};
use fleet_config::Config;

/// Build a client from the loaded configuration.
pub fn build_client(config: &Config) -> Result<FleetClient> {
    Ok(FleetClientBuilder::from_config(config).build()?)
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
