use codepush_http_client::HttpError;
use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum CodePushClientError {
    #[snafu(display("Http error: {source}"))]
    Http { source: HttpError },

    #[snafu(display("Serialization error: {message}"))]
    Serde { message: String },

    #[snafu(display("Package file error for '{path}': {message}"))]
    PackageFile { path: String, message: String },
}

impl From<HttpError> for CodePushClientError {
    fn from(source: HttpError) -> Self {
        CodePushClientError::Http { source }
    }
}

impl From<serde_json::Error> for CodePushClientError {
    fn from(e: serde_json::Error) -> Self {
        CodePushClientError::Serde {
            message: e.to_string(),
        }
    }
}
