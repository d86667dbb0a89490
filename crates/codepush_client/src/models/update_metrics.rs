use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated install counts for one deployed package version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetrics {
    pub active: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloaded: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installed: Option<u64>,
}

/// Metrics keyed by package label or app version.
pub type DeploymentMetrics = BTreeMap<String, UpdateMetrics>;
