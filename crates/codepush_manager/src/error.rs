use codepush_client::CodePushClientError;
use snafu::Snafu;

/// Which manager operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerErrorKind {
    CreateApp,
    CreateDeployment,
    GetAppData,
    GetDeploymentData,
    GetDeploymentHistory,
    GetDeploymentMetrics,
    PatchDeployment,
    PromoteDeployment,
    RollbackDeployment,
    ReleaseDeployment,
}

impl ManagerErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ManagerErrorKind::CreateApp => "Error creating app",
            ManagerErrorKind::CreateDeployment => "Error creating deployment",
            ManagerErrorKind::GetAppData => "Error getting app data",
            ManagerErrorKind::GetDeploymentData => "Error getting deployment data",
            ManagerErrorKind::GetDeploymentHistory => "Error getting deployment history",
            ManagerErrorKind::GetDeploymentMetrics => "Error Getting deployment metrics",
            ManagerErrorKind::PatchDeployment => "Error patching deployment",
            ManagerErrorKind::PromoteDeployment => "Error promoting deployment",
            ManagerErrorKind::RollbackDeployment => "Error rolling back deployment",
            ManagerErrorKind::ReleaseDeployment => "Error releasing deployment",
        }
    }
}

/// Failure of a [`CodePushManager`](crate::CodePushManager) operation.
///
/// Every failure carries the same code; the underlying cause is kept as `source`
/// and is not classified further.
#[derive(Debug, Snafu)]
#[snafu(display("{}: {}", kind.message(), source))]
pub struct ManagerError {
    pub kind: ManagerErrorKind,
    pub source: CodePushClientError,
}

impl ManagerError {
    pub const CODE: u16 = 500;

    pub fn code(&self) -> u16 {
        Self::CODE
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
