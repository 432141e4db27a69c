//! Integration package commands.

use anyhow::{Result, bail};
use fleet_config::Config;
use tracing::info;

use crate::args::PackageCommand;
use crate::commands::{build_client, print_json};

pub async fn run(config: &Config, command: PackageCommand) -> Result<()> {
    let client = build_client(config)?;

    match command {
        PackageCommand::Info { name, version } => {
            match client.get_package_info(&name, &version).await? {
                Some(info) => print_json(&info),
                None => bail!("Package {name}-{version} not found"),
            }
        }
        PackageCommand::Install {
            name,
            version,
            force,
        } => {
            let assets = client.install_package(&name, &version, force).await?;
            info!(package = %name, version = %version, assets = assets.len(), "Installed package");
            print_json(&assets)
        }
        PackageCommand::Uninstall {
            name,
            version,
            force,
        } => {
            let assets = client.uninstall_package(&name, &version, force).await?;
            info!(package = %name, version = %version, "Uninstalled package");
            print_json(&assets)
        }
    }
}
