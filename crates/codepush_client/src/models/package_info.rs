use serde::{Deserialize, Serialize};

/// Update metadata attached to a release. Also used to patch an existing release.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    /// Binary version range the update targets, e.g. `1.2.x` or `^2.0.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mandatory: Option<bool>,
    /// Service-assigned label, `v1`, `v2`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_hash: Option<String>,
    /// Percentage of users eligible for the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollout: Option<u8>,
}
