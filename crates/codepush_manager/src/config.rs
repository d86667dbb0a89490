use codepush_client::apis::DEFAULT_SERVER_URL;
use snafu::Snafu;
use std::env;
use std::path::PathBuf;

pub const ACCESS_KEY_VAR: &str = "CODEPUSH_ACCESS_KEY";
pub const APP_NAME_VAR: &str = "CODEPUSH_APP_NAME";
pub const SERVER_URL_VAR: &str = "CODEPUSH_SERVER_URL";

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ConfigError {
    #[snafu(display("{name} environment variable must be defined"))]
    MissingVariable { name: String },

    #[snafu(display("Failed to load .env file: {message}"))]
    EnvFile { message: String },
}

// A missing .env file is fine, the variables may already be set.
fn ignore_missing_env_file(result: Result<PathBuf, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::EnvFile {
            message: e.to_string(),
        }),
    }
}

/// Everything needed to build a [`CodePushManager`](crate::CodePushManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Base URL of the management server e.g. https://codepush.appcenter.ms
    pub server_url: String,
    /// Access key used as the bearer token.
    pub access_key: String,
    /// Base name; per-OS apps are named `{app_base_name}-{os}`.
    pub app_base_name: String,
}

impl ManagerConfig {
    pub fn new(access_key: impl Into<String>, app_base_name: impl Into<String>) -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            access_key: access_key.into(),
            app_base_name: app_base_name.into(),
        }
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Reads the config from the process environment, loading a `.env` file first if one exists.
    pub fn from_environment() -> Result<Self, ConfigError> {
        ignore_missing_env_file(dotenvy::dotenv())?;
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingVariable {
                    name: name.to_string(),
                })
        };

        let access_key = required(ACCESS_KEY_VAR)?;
        let app_base_name = required(APP_NAME_VAR)?;
        let server_url = lookup(SERVER_URL_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Ok(Self {
            server_url,
            access_key,
            app_base_name,
        })
    }
}
