use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pointer to stored binary content for a package or one of its diffs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobInfo {
    pub size: u64,
    pub url: String,
}

/// Diff packages keyed by the hash of the package they patch from.
pub type PackageHashToBlobInfoMap = BTreeMap<String, BlobInfo>;
