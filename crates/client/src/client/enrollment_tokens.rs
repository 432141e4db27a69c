//! Enrollment token API methods for [`FleetClient`].

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::EnrollmentToken;

impl FleetClient {
    /// List enrollment tokens, optionally restricted to one agent policy.
    pub async fn list_enrollment_tokens(
        &self,
        policy_id: Option<&str>,
    ) -> Result<Vec<EnrollmentToken>> {
        let tokens =
            endpoints::list_enrollment_tokens(&self.http, &self.base_url, &self.credentials)
                .await?;

        Ok(match policy_id {
            None => tokens,
            Some(policy_id) => tokens
                .into_iter()
                .filter(|token| token.policy_id.as_deref() == Some(policy_id))
                .collect(),
        })
    }

    /// Get an enrollment token by id; `None` when it no longer exists.
    pub async fn get_enrollment_token(&self, id: &str) -> Result<Option<EnrollmentToken>> {
        endpoints::get_enrollment_token(&self.http, &self.base_url, &self.credentials, id).await
    }
}
