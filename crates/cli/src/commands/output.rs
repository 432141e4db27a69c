//! Output commands.

use anyhow::{Result, bail};
use fleet_client::models::{CreateOutputRequest, OutputType, UpdateOutputRequest};
use fleet_config::Config;
use tracing::info;

use crate::args::OutputCommand;
use crate::commands::{build_client, print_json};

fn parse_output_type(raw: &str) -> Result<OutputType> {
    match raw {
        "elasticsearch" => Ok(OutputType::Elasticsearch),
        "logstash" => Ok(OutputType::Logstash),
        other => bail!("Unsupported output type: {other:?}"),
    }
}

pub async fn run(config: &Config, command: OutputCommand) -> Result<()> {
    let client = build_client(config)?;

    match command {
        OutputCommand::Create {
            name,
            output_type,
            hosts,
            default_integrations,
            default_monitoring,
            ca_sha256,
            ca_trusted_fingerprint,
            config_yaml,
        } => {
            let request = CreateOutputRequest {
                name,
                output_type: parse_output_type(&output_type)?,
                hosts,
                id: None,
                is_default: default_integrations.then_some(true),
                is_default_monitoring: default_monitoring.then_some(true),
                ca_sha256,
                ca_trusted_fingerprint,
                config_yaml,
            };
            let output = client.create_output(&request).await?;
            info!(id = %output.id, "Created output");
            print_json(&output)
        }
        OutputCommand::Get { id } => match client.get_output(&id).await? {
            Some(output) => print_json(&output),
            None => bail!("Output {id} not found"),
        },
        OutputCommand::Update {
            id,
            name,
            output_type,
            hosts,
            default_integrations,
            default_monitoring,
            ca_sha256,
            ca_trusted_fingerprint,
            config_yaml,
        } => {
            let request = UpdateOutputRequest {
                name,
                output_type: parse_output_type(&output_type)?,
                hosts,
                is_default: default_integrations.then_some(true),
                is_default_monitoring: default_monitoring.then_some(true),
                ca_sha256,
                ca_trusted_fingerprint,
                config_yaml,
            };
            let output = client.update_output(&id, &request).await?;
            print_json(&output)
        }
        OutputCommand::Delete { id } => {
            client.delete_output(&id).await?;
            info!(id = %id, "Deleted output");
            Ok(())
        }
    }
}
