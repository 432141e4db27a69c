//! Fleet Server host commands.

use anyhow::{Result, bail};
use fleet_client::models::{CreateServerHostRequest, UpdateServerHostRequest};
use fleet_config::Config;
use tracing::info;

use crate::args::ServerHostCommand;
use crate::commands::{build_client, print_json};

pub async fn run(config: &Config, command: ServerHostCommand) -> Result<()> {
    let client = build_client(config)?;

    match command {
        ServerHostCommand::Create {
            name,
            host_urls,
            default,
        } => {
            let request = CreateServerHostRequest {
                name,
                host_urls,
                id: None,
                is_default: default.then_some(true),
            };
            let host = client.create_server_host(&request).await?;
            info!(id = %host.id, "Registered Fleet Server host");
            print_json(&host)
        }
        ServerHostCommand::Get { id } => match client.get_server_host(&id).await? {
            Some(host) => print_json(&host),
            None => bail!("Fleet Server host {id} not found"),
        },
        ServerHostCommand::Update {
            id,
            name,
            host_urls,
            default,
        } => {
            let request = UpdateServerHostRequest {
                name,
                host_urls: if host_urls.is_empty() {
                    None
                } else {
                    Some(host_urls)
                },
                is_default: default,
            };
            let host = client.update_server_host(&id, &request).await?;
            print_json(&host)
        }
        ServerHostCommand::Delete { id } => {
            client.delete_server_host(&id).await?;
            info!(id = %id, "Deleted Fleet Server host");
            Ok(())
        }
    }
}
