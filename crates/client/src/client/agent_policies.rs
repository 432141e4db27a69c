//! Agent policy API methods for [`FleetClient`].

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AgentPolicy, AgentPolicyCreateRequest, AgentPolicyUpdateRequest};

impl FleetClient {
    /// Create an agent policy.
    pub async fn create_agent_policy(
        &self,
        request: &AgentPolicyCreateRequest,
    ) -> Result<AgentPolicy> {
        endpoints::create_agent_policy(&self.http, &self.base_url, &self.credentials, request)
            .await
    }

    /// Get an agent policy by id; `None` when it no longer exists.
    pub async fn get_agent_policy(&self, id: &str) -> Result<Option<AgentPolicy>> {
        endpoints::get_agent_policy(&self.http, &self.base_url, &self.credentials, id).await
    }

    /// Update an agent policy.
    pub async fn update_agent_policy(
        &self,
        id: &str,
        request: &AgentPolicyUpdateRequest,
    ) -> Result<AgentPolicy> {
        endpoints::update_agent_policy(&self.http, &self.base_url, &self.credentials, id, request)
            .await
    }

    /// Delete an agent policy.
    pub async fn delete_agent_policy(&self, id: &str) -> Result<()> {
        endpoints::delete_agent_policy(&self.http, &self.base_url, &self.credentials, id).await
    }
}
