use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current_account: Option<bool>,
    /// `Owner` or `Collaborator`.
    pub permission: String,
}

/// Collaborators keyed by account email.
pub type CollaboratorMap = BTreeMap<String, CollaboratorProperties>;
