use serde::{Deserialize, Serialize};

use crate::models::{PackageHashToBlobInfoMap, PackageInfo};

/// An uploaded update bundle together with its release metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(flatten)]
    pub info: PackageInfo,
    pub blob_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_package_map: Option<PackageHashToBlobInfoMap>,
    /// Label of the package this one was promoted or rolled back from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_label: Option<String>,
    /// Deployment this package was promoted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_deployment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released_by: Option<String>,
    /// `Upload`, `Promote` or `Rollback`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_method: Option<String>,
    /// Size of the bundle in bytes.
    pub size: u64,
    /// Milliseconds since the Unix epoch.
    pub upload_time: u64,
}
