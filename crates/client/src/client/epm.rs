//! Integration package (EPM) API methods for [`FleetClient`].

use crate::client::FleetClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{PackageAsset, PackageInfo};

impl FleetClient {
    /// Get registry information for a package version; `None` when the
    /// package is unknown.
    pub async fn get_package_info(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<PackageInfo>> {
        endpoints::get_package_info(&self.http, &self.base_url, &self.credentials, name, version)
            .await
    }

    /// Install a package version.
    pub async fn install_package(
        &self,
        name: &str,
        version: &str,
        force: bool,
    ) -> Result<Vec<PackageAsset>> {
        endpoints::install_package(
            &self.http,
            &self.base_url,
            &self.credentials,
            name,
            version,
            force,
        )
        .await
    }

    /// Uninstall a package version.
    pub async fn uninstall_package(
        &self,
        name: &str,
        version: &str,
        force: bool,
    ) -> Result<Vec<PackageAsset>> {
        endpoints::uninstall_package(
            &self.http,
            &self.base_url,
            &self.credentials,
            name,
            version,
            force,
        )
        .await
    }
}
