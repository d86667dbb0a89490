#![allow(dead_code)]
pub mod logging;

use async_trait::async_trait;
use codepush_http_client::{HttpError, ProgressCallback};
use codepush_manager::{
    App, BlobInfo, CodePushApi, CodePushClientError, CodePushManager, CodePushOs, Deployment,
    DeploymentMetrics, Package, PackageInfo, UpdateMetrics,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// One call received by [`StubCodePushApi`], with owned copies of its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddApp {
        app_name: String,
        os: CodePushOs,
        platform: String,
        manually_provision_deployments: bool,
    },
    AddDeployment {
        app_name: String,
        deployment_name: String,
    },
    GetApp {
        app_name: String,
    },
    GetDeployment {
        app_name: String,
        deployment_name: String,
    },
    GetDeploymentHistory {
        app_name: String,
        deployment_name: String,
    },
    GetDeploymentMetrics {
        app_name: String,
        deployment_name: String,
    },
    PatchRelease {
        app_name: String,
        deployment_name: String,
        label: String,
        info: PackageInfo,
    },
    Promote {
        app_name: String,
        source_deployment: String,
        destination_deployment: String,
        info: Option<PackageInfo>,
    },
    Rollback {
        app_name: String,
        deployment_name: String,
        target_release: Option<String>,
    },
    Release {
        app_name: String,
        deployment_name: String,
        file_path: PathBuf,
        target_binary_version: String,
        info: PackageInfo,
        has_progress: bool,
    },
}

/// Canned answers for every remote operation.
#[derive(Debug, Clone)]
pub struct Responses {
    pub app: App,
    pub deployment: Deployment,
    pub history: Vec<Package>,
    pub metrics: DeploymentMetrics,
    pub package: Package,
}

impl Default for Responses {
    fn default() -> Self {
        let package = sample_package("v2");
        Self {
            app: App {
                name: "MyApp-ios".to_string(),
                deployments: Some(vec!["Staging".to_string(), "Production".to_string()]),
                os: Some(CodePushOs::Ios),
                platform: Some("React-Native".to_string()),
                ..Default::default()
            },
            deployment: Deployment {
                name: "Staging".to_string(),
                key: Some("staging-key".to_string()),
                package: Some(package.clone()),
            },
            history: vec![sample_package("v1"), package.clone()],
            metrics: DeploymentMetrics::from([
                (
                    "v1".to_string(),
                    UpdateMetrics {
                        active: 4,
                        installed: Some(9),
                        ..Default::default()
                    },
                ),
                (
                    "v2".to_string(),
                    UpdateMetrics {
                        active: 11,
                        downloaded: Some(12),
                        failed: Some(1),
                        installed: Some(11),
                    },
                ),
            ]),
            package,
        }
    }
}

/// In-memory stand-in for the CodePush service.
pub struct StubCodePushApi {
    responses: Responses,
    failure: Option<String>,
    pub calls: Mutex<Vec<Call>>,
}

impl StubCodePushApi {
    pub fn succeeding() -> Self {
        Self {
            responses: Responses::default(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            responses: Responses::default(),
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T: Clone>(&self, call: Call, value: &T) -> Result<T, CodePushClientError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(CodePushClientError::Http {
                source: HttpError::StatusError {
                    status: 404,
                    message: message.clone(),
                },
            }),
            None => Ok(value.clone()),
        }
    }
}

#[async_trait]
impl CodePushApi for StubCodePushApi {
    async fn add_app(
        &self,
        app_name: &str,
        os: CodePushOs,
        platform: &str,
        manually_provision_deployments: bool,
    ) -> Result<App, CodePushClientError> {
        let call = Call::AddApp {
            app_name: app_name.to_string(),
            os,
            platform: platform.to_string(),
            manually_provision_deployments,
        };
        self.answer(call, &self.responses.app)
    }

    async fn add_deployment(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Deployment, CodePushClientError> {
        let call = Call::AddDeployment {
            app_name: app_name.to_string(),
            deployment_name: deployment_name.to_string(),
        };
        self.answer(call, &self.responses.deployment)
    }

    async fn get_app(&self, app_name: &str) -> Result<App, CodePushClientError> {
        let call = Call::GetApp {
            app_name: app_name.to_string(),
        };
        self.answer(call, &self.responses.app)
    }

    async fn get_deployment(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Deployment, CodePushClientError> {
        let call = Call::GetDeployment {
            app_name: app_name.to_string(),
            deployment_name: deployment_name.to_string(),
        };
        self.answer(call, &self.responses.deployment)
    }

    async fn get_deployment_history(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Vec<Package>, CodePushClientError> {
        let call = Call::GetDeploymentHistory {
            app_name: app_name.to_string(),
            deployment_name: deployment_name.to_string(),
        };
        self.answer(call, &self.responses.history)
    }

    async fn get_deployment_metrics(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<DeploymentMetrics, CodePushClientError> {
        let call = Call::GetDeploymentMetrics {
            app_name: app_name.to_string(),
            deployment_name: deployment_name.to_string(),
        };
        self.answer(call, &self.responses.metrics)
    }

    async fn patch_release(
        &self,
        app_name: &str,
        deployment_name: &str,
        label: &str,
        info: PackageInfo,
    ) -> Result<(), CodePushClientError> {
        let call = Call::PatchRelease {
            app_name: app_name.to_string(),
            deployment_name: deployment_name.to_string(),
            label: label.to_string(),
            info,
        };
        self.answer(call, &())
    }

    async fn promote(
        &self,
        app_name: &str,
        source_deployment: &str,
        destination_deployment: &str,
        info: Option<PackageInfo>,
    ) -> Result<Package, CodePushClientError> {
        let call = Call::Promote {
            app_name: app_name.to_string(),
            source_deployment: source_deployment.to_string(),
            destination_deployment: destination_deployment.to_string(),
            info,
        };
        self.answer(call, &self.responses.package)
    }

    async fn rollback(
        &self,
        app_name: &str,
        deployment_name: &str,
        target_release: Option<&str>,
    ) -> Result<(), CodePushClientError> {
        let call = Call::Rollback {
            app_name: app_name.to_string(),
            deployment_name: deployment_name.to_string(),
            target_release: target_release.map(str::to_string),
        };
        self.answer(call, &())
    }

    async fn release(
        &self,
        app_name: &str,
        deployment_name: &str,
        file_path: &Path,
        target_binary_version: &str,
        info: PackageInfo,
        progress: Option<ProgressCallback>,
    ) -> Result<Package, CodePushClientError> {
        if let Some(callback) = &progress {
            callback(50.0);
            callback(100.0);
        }
        let call = Call::Release {
            app_name: app_name.to_string(),
            deployment_name: deployment_name.to_string(),
            file_path: file_path.to_path_buf(),
            target_binary_version: target_binary_version.to_string(),
            info,
            has_progress: progress.is_some(),
        };
        self.answer(call, &self.responses.package)
    }
}

pub fn sample_package(label: &str) -> Package {
    Package {
        info: PackageInfo {
            app_version: Some("1.0.0".to_string()),
            label: Some(label.to_string()),
            package_hash: Some(format!("hash-{label}")),
            is_mandatory: Some(false),
            ..Default::default()
        },
        blob_url: format!("https://blob.example/{label}"),
        diff_package_map: Some(
            [(
                "hash-v0".to_string(),
                BlobInfo {
                    size: 64,
                    url: format!("https://blob.example/{label}-diff"),
                },
            )]
            .into_iter()
            .collect(),
        ),
        released_by: Some("dev@example.com".to_string()),
        release_method: Some("Upload".to_string()),
        size: 4096,
        upload_time: 1_700_000_000_000,
        ..Default::default()
    }
}

pub fn manager_with(stub: &Arc<StubCodePushApi>) -> CodePushManager {
    CodePushManager::with_client(stub.clone(), "MyApp")
}
