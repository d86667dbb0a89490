pub mod config;
pub mod error;
pub mod manager;
pub mod naming;

pub use codepush_client::models::{
    App, BlobInfo, CodePushOs, CollaboratorMap, CollaboratorProperties, Deployment,
    DeploymentMetrics, Package, PackageHashToBlobInfoMap, PackageInfo, UpdateMetrics,
};
pub use codepush_client::{CodePushApi, CodePushClient, CodePushClientError};
pub use config::{ConfigError, ManagerConfig};
pub use error::{ManagerError, ManagerErrorKind};
pub use manager::{CodePushManager, DEPLOYMENT_PLATFORM};
pub use naming::app_name_for;
