//! Package policy commands.
//!
//! `apply` is the declarative entry point: it reads a
//! [`PackagePolicyPlan`] manifest, creates the policy (or updates it when
//! the manifest carries an id), then re-reads it and prints the flattened,
//! drift-free state.

use std::path::Path;

use anyhow::{Context, Result, bail};
use fleet_client::PackagePolicyPlan;
use fleet_client::reconcile::policy_state;
use fleet_config::Config;
use tracing::info;

use crate::args::PackagePolicyCommand;
use crate::commands::{build_client, print_json};

fn read_plan(path: &Path) -> Result<PackagePolicyPlan> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse manifest {}", path.display()))
}

pub async fn run(config: &Config, command: PackagePolicyCommand) -> Result<()> {
    let client = build_client(config)?;

    match command {
        PackagePolicyCommand::Apply { file } => {
            let plan = read_plan(&file)?;
            let state = client.apply_package_policy(&plan).await?;
            info!(id = %state.id, "Applied package policy");
            print_json(&state)
        }
        PackagePolicyCommand::Get { id } => match client.get_package_policy(&id).await? {
            Some(policy) => {
                // No declared configuration is available on import, so the
                // state carries every observed variable.
                let state = policy_state(&policy, &[])?;
                print_json(&state)
            }
            None => bail!("Package policy {id} not found"),
        },
        PackagePolicyCommand::Delete { id, force } => {
            client.delete_package_policy(&id, force).await?;
            info!(id = %id, "Deleted package policy");
            Ok(())
        }
    }
}
