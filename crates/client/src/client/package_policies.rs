//! Package policy API methods for [`FleetClient`].
//!
//! Besides plain CRUD, [`FleetClient::apply_package_policy`] runs the full
//! declarative cycle: build the request from a plan, create or update, then
//! re-read and flatten the response into configuration-shaped state.

use tracing::debug;

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::{FleetError, Result};
use crate::models::{PackagePolicy, PackagePolicyRequest};
use crate::reconcile::{PackagePolicyPlan, PackagePolicyState, policy_state};

impl FleetClient {
    /// Create a package policy.
    pub async fn create_package_policy(
        &self,
        request: &PackagePolicyRequest,
    ) -> Result<PackagePolicy> {
        endpoints::create_package_policy(&self.http, &self.base_url, &self.credentials, request)
            .await
    }

    /// Get a package policy by id; `None` when it no longer exists.
    pub async fn get_package_policy(&self, id: &str) -> Result<Option<PackagePolicy>> {
        endpoints::get_package_policy(&self.http, &self.base_url, &self.credentials, id).await
    }

    /// Update a package policy (full object, no patch semantics).
    pub async fn update_package_policy(
        &self,
        id: &str,
        request: &PackagePolicyRequest,
    ) -> Result<PackagePolicy> {
        endpoints::update_package_policy(
            &self.http,
            &self.base_url,
            &self.credentials,
            id,
            request,
        )
        .await
    }

    /// Delete a package policy.
    pub async fn delete_package_policy(&self, id: &str, force: bool) -> Result<()> {
        endpoints::delete_package_policy(&self.http, &self.base_url, &self.credentials, id, force)
            .await
    }

    /// Apply a declarative plan: create the policy when the plan carries no
    /// id, update otherwise, then re-read and return the flattened state.
    pub async fn apply_package_policy(
        &self,
        plan: &PackagePolicyPlan,
    ) -> Result<PackagePolicyState> {
        let request = plan.to_request()?;

        let id = match &plan.id {
            None => {
                let created = self.create_package_policy(&request).await?;
                debug!(id = %created.id, "Created package policy");
                created.id
            }
            Some(id) => {
                self.update_package_policy(id, &request).await?;
                debug!(id = %id, "Updated package policy");
                id.clone()
            }
        };

        let policy = self.get_package_policy(&id).await?.ok_or_else(|| {
            FleetError::InvalidResponse(format!(
                "Package policy {id} disappeared between write and read"
            ))
        })?;

        policy_state(&policy, &plan.inputs)
    }
}
