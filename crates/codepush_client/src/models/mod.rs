pub mod app;
pub mod blob_info;
pub mod code_push_os;
pub mod collaborator;
pub mod deployment;
pub mod new_app;
pub mod package;
pub mod package_info;
pub mod update_metrics;

pub use app::App;
pub use blob_info::{BlobInfo, PackageHashToBlobInfoMap};
pub use code_push_os::{CodePushOs, ParseCodePushOsError};
pub use collaborator::{CollaboratorMap, CollaboratorProperties};
pub use deployment::Deployment;
pub use new_app::NewApp;
pub use package::Package;
pub use package_info::PackageInfo;
pub use update_metrics::{DeploymentMetrics, UpdateMetrics};
