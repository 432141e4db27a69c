//! Output API methods for [`FleetClient`].

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateOutputRequest, Output, UpdateOutputRequest};

impl FleetClient {
    /// Create an output.
    pub async fn create_output(&self, request: &CreateOutputRequest) -> Result<Output> {
        endpoints::create_output(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Get an output by id; `None` when it no longer exists.
    pub async fn get_output(&self, id: &str) -> Result<Option<Output>> {
        endpoints::get_output(&self.http, &self.base_url, &self.credentials, id).await
    }

    /// Update an output.
    pub async fn update_output(
        &self,
        id: &str,
        request: &UpdateOutputRequest,
    ) -> Result<Output> {
        endpoints::update_output(&self.http, &self.base_url, &self.credentials, id, request).await
    }

    /// Delete an output.
    pub async fn delete_output(&self, id: &str) -> Result<()> {
        endpoints::delete_output(&self.http, &self.base_url, &self.credentials, id).await
    }
}
