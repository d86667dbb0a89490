mod client;
mod error;

use async_trait::async_trait;
use codepush_http_client::ProgressCallback;
use std::path::Path;

use crate::models::{App, CodePushOs, Deployment, DeploymentMetrics, Package, PackageInfo};

pub use client::{CodePushClient, DEFAULT_SERVER_URL, SDK_VERSION};
pub use error::CodePushClientError;

/// The remote CodePush management operations.
///
/// [`CodePushClient`] implements this over HTTP. Anything that needs to stand in for the
/// service, such as a test double, implements it directly.
#[async_trait]
pub trait CodePushApi: Send + Sync {
    async fn add_app(
        &self,
        app_name: &str,
        os: CodePushOs,
        platform: &str,
        manually_provision_deployments: bool,
    ) -> Result<App, CodePushClientError>;

    async fn add_deployment(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Deployment, CodePushClientError>;

    async fn get_app(&self, app_name: &str) -> Result<App, CodePushClientError>;

    async fn get_deployment(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Deployment, CodePushClientError>;

    async fn get_deployment_history(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Vec<Package>, CodePushClientError>;

    async fn get_deployment_metrics(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<DeploymentMetrics, CodePushClientError>;

    /// Updates the metadata of the release identified by `label`.
    async fn patch_release(
        &self,
        app_name: &str,
        deployment_name: &str,
        label: &str,
        info: PackageInfo,
    ) -> Result<(), CodePushClientError>;

    /// Copies the latest release of `source_deployment` into `destination_deployment`.
    async fn promote(
        &self,
        app_name: &str,
        source_deployment: &str,
        destination_deployment: &str,
        info: Option<PackageInfo>,
    ) -> Result<Package, CodePushClientError>;

    /// Rolls back to `target_release`, or to the previous release when `None`.
    async fn rollback(
        &self,
        app_name: &str,
        deployment_name: &str,
        target_release: Option<&str>,
    ) -> Result<(), CodePushClientError>;

    /// Uploads the package at `file_path` as a new release targeting `target_binary_version`.
    async fn release(
        &self,
        app_name: &str,
        deployment_name: &str,
        file_path: &Path,
        target_binary_version: &str,
        info: PackageInfo,
        progress: Option<ProgressCallback>,
    ) -> Result<Package, CodePushClientError>;
}
