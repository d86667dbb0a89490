use serde::{Deserialize, Serialize};

use crate::models::Package;

/// A named release channel within an app, e.g. `Staging` or `Production`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub name: String,
    /// Deployment key used by the mobile SDK to query for updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// The latest release, absent until something has been released.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<Package>,
}
