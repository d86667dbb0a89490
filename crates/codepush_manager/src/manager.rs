use codepush_client::models::{App, CodePushOs, Deployment, DeploymentMetrics, Package, PackageInfo};
use codepush_client::{CodePushApi, CodePushClientError};
use codepush_http_client::ProgressCallback;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

#[cfg(feature = "default_http_client")]
use codepush_client::CodePushClient;

#[cfg(feature = "default_http_client")]
use crate::config::ManagerConfig;
use crate::error::{ManagerError, ManagerErrorKind};
use crate::naming::app_name_for;

/// Deployment platform recorded for every app created through the manager.
pub const DEPLOYMENT_PLATFORM: &str = "React-Native";

/// Manages the per-OS CodePush apps that share one base name.
///
/// Every operation performs exactly one call on the underlying [`CodePushApi`] against the
/// app named `{app_base_name}-{os}` and returns the service's answer unchanged. When
/// `verbose` is set the raw result is logged at `info` level.
#[derive(Clone)]
pub struct CodePushManager {
    client: Arc<dyn CodePushApi>,
    app_base_name: String,
}

impl CodePushManager {
    /// Builds a manager talking to the default CodePush server with `access_key`.
    #[cfg(feature = "default_http_client")]
    pub fn new(access_key: &str, app_base_name: &str) -> Result<Self, CodePushClientError> {
        Self::from_config(&ManagerConfig::new(access_key, app_base_name))
    }

    #[cfg(feature = "default_http_client")]
    pub fn from_config(config: &ManagerConfig) -> Result<Self, CodePushClientError> {
        let client = CodePushClient::with_access_key(&config.server_url, &config.access_key)?;
        Ok(Self::with_client(Arc::new(client), &config.app_base_name))
    }

    pub fn with_client(client: Arc<dyn CodePushApi>, app_base_name: &str) -> Self {
        Self {
            client,
            app_base_name: app_base_name.to_string(),
        }
    }

    pub fn app_base_name(&self) -> &str {
        &self.app_base_name
    }

    pub fn app_name(&self, os: CodePushOs) -> String {
        app_name_for(&self.app_base_name, os)
    }

    fn failed(
        &self,
        kind: ManagerErrorKind,
        source: CodePushClientError,
        verbose: bool,
    ) -> ManagerError {
        if verbose {
            warn!("{} for {}: {}", kind.message(), self.app_base_name, source);
        }
        ManagerError { kind, source }
    }

    pub async fn create_app(&self, os: CodePushOs, verbose: bool) -> Result<App, ManagerError> {
        let app = self
            .client
            .add_app(&self.app_name(os), os, DEPLOYMENT_PLATFORM, true)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::CreateApp, e, verbose))?;

        if verbose {
            info!("CodePushApp created: {:?}", app);
        }
        Ok(app)
    }

    pub async fn create_deployment(
        &self,
        deployment_name: &str,
        os: CodePushOs,
        verbose: bool,
    ) -> Result<Deployment, ManagerError> {
        let deployment = self
            .client
            .add_deployment(&self.app_name(os), deployment_name)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::CreateDeployment, e, verbose))?;

        if verbose {
            info!("CodePushDeployment created: {:?}", deployment);
        }
        Ok(deployment)
    }

    pub async fn get_app_data(&self, os: CodePushOs, verbose: bool) -> Result<App, ManagerError> {
        let app = self
            .client
            .get_app(&self.app_name(os))
            .await
            .map_err(|e| self.failed(ManagerErrorKind::GetAppData, e, verbose))?;

        if verbose {
            info!("CodePushApp data: {:?}", app);
        }
        Ok(app)
    }

    pub async fn get_deploy_data(
        &self,
        os: CodePushOs,
        deployment_name: &str,
        verbose: bool,
    ) -> Result<Deployment, ManagerError> {
        let deployment = self
            .client
            .get_deployment(&self.app_name(os), deployment_name)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::GetDeploymentData, e, verbose))?;

        if verbose {
            info!("CodePushDeployment data: {:?}", deployment);
        }
        Ok(deployment)
    }

    pub async fn get_deploy_history(
        &self,
        os: CodePushOs,
        deployment_name: &str,
        verbose: bool,
    ) -> Result<Vec<Package>, ManagerError> {
        let history = self
            .client
            .get_deployment_history(&self.app_name(os), deployment_name)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::GetDeploymentHistory, e, verbose))?;

        if verbose {
            info!("CodePushDeployment history: {:?}", history);
        }
        Ok(history)
    }

    pub async fn get_deploy_metrics(
        &self,
        os: CodePushOs,
        deployment_name: &str,
        verbose: bool,
    ) -> Result<DeploymentMetrics, ManagerError> {
        let metrics = self
            .client
            .get_deployment_metrics(&self.app_name(os), deployment_name)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::GetDeploymentMetrics, e, verbose))?;

        if verbose {
            info!("CodePushDeployment metrics: {:?}", metrics);
        }
        Ok(metrics)
    }

    /// Updates the metadata of the release `label` in `deployment_name`.
    pub async fn patch_deployment(
        &self,
        os: CodePushOs,
        deployment_name: &str,
        label: &str,
        update_metadata: PackageInfo,
        verbose: bool,
    ) -> Result<(), ManagerError> {
        self.client
            .patch_release(&self.app_name(os), deployment_name, label, update_metadata)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::PatchDeployment, e, verbose))?;

        if verbose {
            info!("Release {} patched in {}", label, deployment_name);
        }
        Ok(())
    }

    pub async fn promote_deployment(
        &self,
        os: CodePushOs,
        source_deployment: &str,
        destination_deployment: &str,
        verbose: bool,
    ) -> Result<Package, ManagerError> {
        let promoted = self
            .client
            .promote(&self.app_name(os), source_deployment, destination_deployment, None)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::PromoteDeployment, e, verbose))?;

        if verbose {
            info!("Deployment promoted: {:?}", promoted);
        }
        Ok(promoted)
    }

    /// Rolls `deployment_name` back to `target_release`, or to the previous release when `None`.
    pub async fn rollback_deployment(
        &self,
        os: CodePushOs,
        deployment_name: &str,
        target_release: Option<&str>,
        verbose: bool,
    ) -> Result<(), ManagerError> {
        self.client
            .rollback(&self.app_name(os), deployment_name, target_release)
            .await
            .map_err(|e| self.failed(ManagerErrorKind::RollbackDeployment, e, verbose))?;

        if verbose {
            info!("Rollback requested for {}", deployment_name);
        }
        Ok(())
    }

    /// Uploads the package at `file_path` to `deployment_name`. Upload progress is logged at
    /// `debug` level.
    pub async fn release_deployment(
        &self,
        os: CodePushOs,
        deployment_name: &str,
        file_path: &Path,
        target_binary_version: &str,
        update_metadata: PackageInfo,
        verbose: bool,
    ) -> Result<Package, ManagerError> {
        let upload_progress: ProgressCallback =
            Arc::new(|progress: f64| debug!("Upload progress: {:.0}%", progress));

        let release = self
            .client
            .release(
                &self.app_name(os),
                deployment_name,
                file_path,
                target_binary_version,
                update_metadata,
                Some(upload_progress),
            )
            .await
            .map_err(|e| self.failed(ManagerErrorKind::ReleaseDeployment, e, verbose))?;

        if verbose {
            info!("Release requested: {:?}", release);
        }
        Ok(release)
    }
}
