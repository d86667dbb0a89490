use async_trait::async_trait;
use snafu::Snafu;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

/// Size of each body chunk handed to the transport while uploading a file.
pub const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Snafu)]
pub enum HttpError {
    #[snafu(display("HttpError: {message}"))]
    RequestError { message: String },

    #[snafu(display("HttpError: request failed with status {status}: {message}"))]
    StatusError { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub body: Vec<u8>,
    pub headers: HashMap<String, String>,
}

/// Receives the cumulative upload percentage, from 0.0 to 100.0.
pub type ProgressCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// A multipart form carrying one file part and any number of text parts.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file_field: String,
    pub file_name: String,
    pub file_contents: Vec<u8>,
    pub text_fields: Vec<(String, String)>,
}

#[async_trait]
/// This trait must be implemented by any HTTP client that is used by our Rust crates.
/// It is assumed the implementing type will provide the hostname, authentication headers, etc.
/// as needed for each request.
///
/// By default, this trait requires the implementing type to be `Send + Sync`.
pub trait HttpClient: Send + Sync {
    async fn request(
        &self,
        http_method: HttpMethod,
        path: String,
        query: Option<HashMap<String, String>>,
        body: Option<Vec<u8>>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError>;

    /// POSTs a multipart form, reporting progress as the file part is consumed.
    ///
    /// The file part is already in memory in `form.file_contents`. Progress tracks how much of
    /// that body the transport has pulled off the stream, not what the server has acknowledged.
    async fn upload(
        &self,
        path: String,
        form: UploadForm,
        progress: Option<ProgressCallback>,
    ) -> Result<HttpResponse, HttpError>;
}

/// Splits `total` bytes into consecutive ranges of at most `chunk_size`, each paired with
/// the cumulative percentage sent once that range has gone out.
pub fn upload_chunks(total: usize, chunk_size: usize) -> Vec<(Range<usize>, f64)> {
    if total == 0 {
        return vec![(0..0, 100.0)];
    }
    let chunk_size = chunk_size.max(1);
    (0..total)
        .step_by(chunk_size)
        .map(|start| {
            let end = (start + chunk_size).min(total);
            (start..end, end as f64 * 100.0 / total as f64)
        })
        .collect()
}

#[cfg(feature = "default_client")]
pub struct DefaultHttpClient {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "default_client")]
impl DefaultHttpClient {
    pub fn new(base_url: &str) -> Self {
        DefaultHttpClient {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_headers(
        base_url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Self, HttpError> {
        let mut header_map = reqwest::header::HeaderMap::new();
        for (header_name, header_value) in headers {
            header_map.insert(
                reqwest::header::HeaderName::from_bytes(header_name.as_bytes()).map_err(|e| {
                    HttpError::RequestError {
                        message: format!("Invalid header name '{}': {}", header_name, e),
                    }
                })?,
                reqwest::header::HeaderValue::from_str(header_value).map_err(|e| {
                    HttpError::RequestError {
                        message: format!("Invalid header value for '{}': {}", header_name, e),
                    }
                })?,
            );
        }
        let client = reqwest::Client::builder()
            .default_headers(header_map)
            .build()
            .map_err(|e| HttpError::RequestError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(DefaultHttpClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn into_http_response(response: reqwest::Response) -> Result<HttpResponse, HttpError> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response text".to_string());
            return Err(HttpError::StatusError {
                status: status.as_u16(),
                message: text,
            });
        }

        let response_headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::RequestError {
                message: e.to_string(),
            })?
            .to_vec();

        Ok(HttpResponse {
            body,
            headers: response_headers,
        })
    }
}

#[cfg(feature = "default_client")]
#[async_trait]
impl HttpClient for DefaultHttpClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: String,
        query: Option<HashMap<String, String>>,
        body: Option<Vec<u8>>,
        headers: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        let method = reqwest::Method::from_bytes(method.as_str().as_bytes()).map_err(|e| {
            HttpError::RequestError {
                message: e.to_string(),
            }
        })?;

        let mut request_builder = self.client.request(method, &url);

        if let Some(query_params) = query {
            request_builder = request_builder.query(&query_params);
        }

        if let Some(header_params) = headers {
            for (key, value) in header_params {
                request_builder = request_builder.header(key, value);
            }
        }

        if let Some(body_data) = body {
            request_builder = request_builder.body(body_data);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|e| HttpError::RequestError {
                message: e.to_string(),
            })?;

        Self::into_http_response(response).await
    }

    async fn upload(
        &self,
        path: String,
        form: UploadForm,
        progress: Option<ProgressCallback>,
    ) -> Result<HttpResponse, HttpError> {
        let url = format!("{}{}", self.base_url, path);

        // The callback fires as each chunk is handed to hyper for writing.
        let contents = bytes::Bytes::from(form.file_contents);
        let total = contents.len();
        let chunks: Vec<(bytes::Bytes, f64)> = upload_chunks(total, UPLOAD_CHUNK_SIZE)
            .into_iter()
            .map(|(range, percent)| (contents.slice(range), percent))
            .collect();

        let stream = futures::stream::iter(chunks.into_iter().map(move |(chunk, percent)| {
            if let Some(callback) = &progress {
                callback(percent);
            }
            Ok::<bytes::Bytes, std::io::Error>(chunk)
        }));

        let part = reqwest::multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(stream),
            total as u64,
        )
        .file_name(form.file_name);

        let mut multipart = reqwest::multipart::Form::new().part(form.file_field, part);
        for (name, value) in form.text_fields {
            multipart = multipart.text(name, value);
        }

        let response = self
            .client
            .post(&url)
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| HttpError::RequestError {
                message: e.to_string(),
            })?;

        Self::into_http_response(response).await
    }
}
