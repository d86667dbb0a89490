use async_trait::async_trait;
use codepush_http_client::{HttpClient, HttpMethod, ProgressCallback, UploadForm};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

#[cfg(feature = "default_client")]
use codepush_http_client::DefaultHttpClient;

use super::{CodePushApi, CodePushClientError};
use crate::models::{App, CodePushOs, Deployment, DeploymentMetrics, NewApp, Package, PackageInfo};

pub const DEFAULT_SERVER_URL: &str = "https://codepush.appcenter.ms";
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

const API_VERSION_ACCEPT: &str = "application/vnd.code-push.v2+json";

// Same set encodeURIComponent leaves alone.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Deserialize)]
struct AppResponse {
    app: App,
}

#[derive(Deserialize)]
struct DeploymentResponse {
    deployment: Deployment,
}

#[derive(Deserialize)]
struct HistoryResponse {
    history: Vec<Package>,
}

#[derive(Deserialize)]
struct MetricsResponse {
    metrics: DeploymentMetrics,
}

#[derive(Deserialize)]
struct PackageResponse {
    package: Package,
}

#[derive(Serialize)]
struct NewDeployment<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageInfoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    package_info: Option<PackageInfo>,
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn deployment_path(app_name: &str, deployment_name: &str) -> String {
    format!(
        "/apps/{}/deployments/{}",
        encode(app_name),
        encode(deployment_name)
    )
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, CodePushClientError> {
    Ok(serde_json::from_slice(body)?)
}

/// REST client for the CodePush management API.
pub struct CodePushClient {
    http_client: Arc<dyn HttpClient>,
}

impl CodePushClient {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        CodePushClient { http_client }
    }

    /// Headers every management request must carry.
    pub fn default_headers(access_key: &str) -> HashMap<String, String> {
        HashMap::from([
            ("Authorization".to_string(), format!("Bearer {}", access_key)),
            ("Accept".to_string(), API_VERSION_ACCEPT.to_string()),
            ("X-CodePush-SDK-Version".to_string(), SDK_VERSION.to_string()),
        ])
    }

    #[cfg(feature = "default_client")]
    pub fn with_access_key(
        server_url: &str,
        access_key: &str,
    ) -> Result<Self, CodePushClientError> {
        let headers = Self::default_headers(access_key);
        let http_client = DefaultHttpClient::with_headers(server_url, &headers)?;
        Ok(CodePushClient {
            http_client: Arc::new(http_client),
        })
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<&B>,
    ) -> Result<Vec<u8>, CodePushClientError> {
        debug!("{} {}", method.as_str(), path);

        let (body, headers) = match body {
            Some(body) => (
                Some(serde_json::to_vec(body)?),
                Some(HashMap::from([(
                    "Content-Type".to_string(),
                    "application/json".to_string(),
                )])),
            ),
            None => (None, None),
        };

        let response = self
            .http_client
            .request(method, path, None, body, headers)
            .await?;
        Ok(response.body)
    }

    async fn get<T: DeserializeOwned>(&self, path: String) -> Result<T, CodePushClientError> {
        let body = self.send_json::<()>(HttpMethod::Get, path, None).await?;
        decode(&body)
    }

    async fn read_package_file(file_path: &Path) -> Result<Vec<u8>, CodePushClientError> {
        let path_display = file_path.display().to_string();
        let metadata = tokio::fs::metadata(file_path).await.map_err(|e| {
            CodePushClientError::PackageFile {
                path: path_display.clone(),
                message: e.to_string(),
            }
        })?;
        if metadata.is_dir() {
            return Err(CodePushClientError::PackageFile {
                path: path_display,
                message: "expected a package file but found a directory".to_string(),
            });
        }
        tokio::fs::read(file_path)
            .await
            .map_err(|e| CodePushClientError::PackageFile {
                path: path_display,
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl CodePushApi for CodePushClient {
    async fn add_app(
        &self,
        app_name: &str,
        os: CodePushOs,
        platform: &str,
        manually_provision_deployments: bool,
    ) -> Result<App, CodePushClientError> {
        let new_app = NewApp {
            name: app_name.to_string(),
            os,
            platform: platform.to_string(),
            manually_provision_deployments,
        };
        let body = self
            .send_json(HttpMethod::Post, "/apps".to_string(), Some(&new_app))
            .await?;
        Ok(decode::<AppResponse>(&body)?.app)
    }

    async fn add_deployment(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Deployment, CodePushClientError> {
        let path = format!("/apps/{}/deployments", encode(app_name));
        let body = self
            .send_json(
                HttpMethod::Post,
                path,
                Some(&NewDeployment {
                    name: deployment_name,
                }),
            )
            .await?;
        Ok(decode::<DeploymentResponse>(&body)?.deployment)
    }

    async fn get_app(&self, app_name: &str) -> Result<App, CodePushClientError> {
        let path = format!("/apps/{}", encode(app_name));
        Ok(self.get::<AppResponse>(path).await?.app)
    }

    async fn get_deployment(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Deployment, CodePushClientError> {
        let path = deployment_path(app_name, deployment_name);
        Ok(self.get::<DeploymentResponse>(path).await?.deployment)
    }

    async fn get_deployment_history(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<Vec<Package>, CodePushClientError> {
        let path = format!("{}/history", deployment_path(app_name, deployment_name));
        Ok(self.get::<HistoryResponse>(path).await?.history)
    }

    async fn get_deployment_metrics(
        &self,
        app_name: &str,
        deployment_name: &str,
    ) -> Result<DeploymentMetrics, CodePushClientError> {
        let path = format!("{}/metrics", deployment_path(app_name, deployment_name));
        Ok(self.get::<MetricsResponse>(path).await?.metrics)
    }

    async fn patch_release(
        &self,
        app_name: &str,
        deployment_name: &str,
        label: &str,
        info: PackageInfo,
    ) -> Result<(), CodePushClientError> {
        let path = format!("{}/release", deployment_path(app_name, deployment_name));
        let request = PackageInfoRequest {
            package_info: Some(PackageInfo {
                label: Some(label.to_string()),
                ..info
            }),
        };
        self.send_json(HttpMethod::Patch, path, Some(&request)).await?;
        Ok(())
    }

    async fn promote(
        &self,
        app_name: &str,
        source_deployment: &str,
        destination_deployment: &str,
        info: Option<PackageInfo>,
    ) -> Result<Package, CodePushClientError> {
        let path = format!(
            "{}/promote/{}",
            deployment_path(app_name, source_deployment),
            encode(destination_deployment)
        );
        let request = PackageInfoRequest { package_info: info };
        let body = self.send_json(HttpMethod::Post, path, Some(&request)).await?;
        Ok(decode::<PackageResponse>(&body)?.package)
    }

    async fn rollback(
        &self,
        app_name: &str,
        deployment_name: &str,
        target_release: Option<&str>,
    ) -> Result<(), CodePushClientError> {
        let mut path = format!("{}/rollback", deployment_path(app_name, deployment_name));
        if let Some(target) = target_release {
            path.push('/');
            path.push_str(&encode(target));
        }
        self.send_json::<()>(HttpMethod::Post, path, None).await?;
        Ok(())
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
        let path = format!("{}/release", deployment_path(app_name, deployment_name));
        let file_contents = Self::read_package_file(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "package".to_string());

        let info = PackageInfo {
            app_version: Some(target_binary_version.to_string()),
            ..info
        };
        let form = UploadForm {
            file_field: "package".to_string(),
            file_name,
            file_contents,
            text_fields: vec![("packageInfo".to_string(), serde_json::to_string(&info)?)],
        };

        debug!(
            "POST {} ({} bytes, target binary version {})",
            path,
            form.file_contents.len(),
            target_binary_version
        );
        let response = self.http_client.upload(path, form, progress).await?;
        Ok(decode::<PackageResponse>(&response.body)?.package)
    }
}
