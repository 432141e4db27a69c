//! Agent policy endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{KBN_XSRF, parse_json, send, send_allow_missing};
use crate::error::Result;
use crate::models::{
    AgentPolicy, AgentPolicyCreateRequest, AgentPolicyUpdateRequest, DeleteAgentPolicyRequest,
    ItemEnvelope,
};

/// Create an agent policy.
pub async fn create_agent_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &AgentPolicyCreateRequest,
) -> Result<AgentPolicy> {
    let url = format!("{}/api/fleet/agent_policies", base_url);

    let builder = credentials
        .apply(client.post(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<AgentPolicy> =
        parse_json(response, "agent policy create response").await?;
    Ok(envelope.item)
}

/// Get an agent policy by id. Returns `None` when the policy no longer
/// exists.
pub async fn get_agent_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<Option<AgentPolicy>> {
    let url = format!("{}/api/fleet/agent_policies/{}", base_url, id);

    let builder = credentials
        .apply(client.get(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1);
    let Some(response) = send_allow_missing(builder).await? else {
        return Ok(None);
    };

    let envelope: ItemEnvelope<AgentPolicy> =
        parse_json(response, "agent policy get response").await?;
    Ok(Some(envelope.item))
}

/// Update an agent policy.
pub async fn update_agent_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
    request: &AgentPolicyUpdateRequest,
) -> Result<AgentPolicy> {
    let url = format!("{}/api/fleet/agent_policies/{}", base_url, id);

    let builder = credentials
        .apply(client.put(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(request);
    let response = send(builder).await?;

    let envelope: ItemEnvelope<AgentPolicy> =
        parse_json(response, "agent policy update response").await?;
    Ok(envelope.item)
}

/// Delete an agent policy. The Fleet API models this as a POST to the
/// `/delete` sub-path with the id in the body.
pub async fn delete_agent_policy(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &str,
) -> Result<()> {
    let url = format!("{}/api/fleet/agent_policies/delete", base_url);
    let request = DeleteAgentPolicyRequest {
        agent_policy_id: id.to_string(),
    };

    let builder = credentials
        .apply(client.post(&url))
        .header(KBN_XSRF.0, KBN_XSRF.1)
        .json(&request);
    send(builder).await?;

    Ok(())
}
