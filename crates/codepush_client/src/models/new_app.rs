use serde::{Deserialize, Serialize};

use crate::models::CodePushOs;

/// Request body for registering a new app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApp {
    pub name: String,
    pub os: CodePushOs,
    pub platform: String,
    /// When `true` the service does not create the default `Staging`/`Production` deployments.
    pub manually_provision_deployments: bool,
}
