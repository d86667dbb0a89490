use serde::{Deserialize, Serialize};

use crate::models::{CodePushOs, CollaboratorMap};

/// An application registered with the CodePush service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    /// Application name, `{base name}-{os}` for apps created through the manager.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<CollaboratorMap>,
    /// Names of the deployments that belong to this app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<CodePushOs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}
