//! Fleet Server host API methods for [`FleetClient`].

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateServerHostRequest, FleetServerHost, UpdateServerHostRequest};

impl FleetClient {
    /// Register a Fleet Server host.
    pub async fn create_server_host(
        &self,
        request: &CreateServerHostRequest,
    ) -> Result<FleetServerHost> {
        endpoints::create_server_host(&self.http, &self.base_url, &self.credentials, request)
            .await
    }

    /// Get a Fleet Server host by id; `None` when it no longer exists.
    pub async fn get_server_host(&self, id: &str) -> Result<Option<FleetServerHost>> {
        endpoints::get_server_host(&self.http, &self.base_url, &self.credentials, id).await
    }

    /// Update a Fleet Server host.
    pub async fn update_server_host(
        &self,
        id: &str,
        request: &UpdateServerHostRequest,
    ) -> Result<FleetServerHost> {
        endpoints::update_server_host(&self.http, &self.base_url, &self.credentials, id, request)
            .await
    }

    /// Delete a Fleet Server host.
    pub async fn delete_server_host(&self, id: &str) -> Result<()> {
        endpoints::delete_server_host(&self.http, &self.base_url, &self.credentials, id).await
    }
}
