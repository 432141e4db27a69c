//! Agent policy commands.

use anyhow::{Result, bail};
use fleet_client::models::{
    AgentPolicyCreateRequest, AgentPolicyUpdateRequest, MonitoringTarget,
};
use fleet_config::Config;
use tracing::info;

use crate::args::AgentPolicyCommand;
use crate::commands::{build_client, print_json};

fn monitoring_targets(logs: bool, metrics: bool) -> Option<Vec<MonitoringTarget>> {
    let mut targets = Vec::with_capacity(2);
    if logs {
        targets.push(MonitoringTarget::Logs);
    }
    if metrics {
        targets.push(MonitoringTarget::Metrics);
    }
    Some(targets)
}

pub async fn run(config: &Config, command: AgentPolicyCommand) -> Result<()> {
    let client = build_client(config)?;

    match command {
        AgentPolicyCommand::Create {
            name,
            namespace,
            description,
            monitor_logs,
            monitor_metrics,
        } => {
            let request = AgentPolicyCreateRequest {
                name,
                namespace,
                description,
                monitoring_enabled: monitoring_targets(monitor_logs, monitor_metrics),
                ..Default::default()
            };
            let policy = client.create_agent_policy(&request).await?;
            info!(id = %policy.id, "Created agent policy");
            print_json(&policy)
        }
        AgentPolicyCommand::Get { id } => match client.get_agent_policy(&id).await? {
            Some(policy) => print_json(&policy),
            None => bail!("Agent policy {id} not found"),
        },
        AgentPolicyCommand::Update {
            id,
            name,
            namespace,
            description,
            monitor_logs,
            monitor_metrics,
        } => {
            let request = AgentPolicyUpdateRequest {
                name,
                namespace,
                description,
                monitoring_enabled: monitoring_targets(monitor_logs, monitor_metrics),
                ..Default::default()
            };
            let policy = client.update_agent_policy(&id, &request).await?;
            print_json(&policy)
        }
        AgentPolicyCommand::Delete { id } => {
            client.delete_agent_policy(&id).await?;
            info!(id = %id, "Deleted agent policy");
            Ok(())
        }
    }
}
