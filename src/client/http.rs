//! HTTP transport implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;

use super::Transport;
use super::request::{Request, Response};
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};

/// JSON:API media type
const JSONAPI_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed [`Transport`].
///
/// The API token is sent as a bearer token on every request. It is never
/// refreshed or exchanged.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
    address: String,
}

impl HttpTransport {
    /// Create a transport for the server at `address` (e.g. `https://app.terraform.io`).
    pub fn new(address: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ConfigError::Invalid("API token contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static(JSONAPI_MEDIA_TYPE));

        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("tfe-orgs/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            address: address.trim_end_matches('/').to_string(),
        })
    }

    /// Create a transport from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.validate_auth()?;
        Self::new(&config.address, token)
    }

    /// Server address requests are sent to
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> Result<Response> {
        let url = format!("{}{}", self.address, request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self.http.request(request.method.clone(), &url);

        if let Some(ref options) = request.list_options {
            let params = options.to_query_params();
            if !params.is_empty() {
                builder = builder.query(&params);
            }
        }

        if let Some(ref body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, JSONAPI_MEDIA_TYPE)
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("{} {} -> {}", request.method, url, status);

        if status.is_success() {
            let body = response.bytes().await.map_err(ApiError::from)?;
            return Ok(Response::new(status.as_u16(), body.to_vec()));
        }

        let text = response.text().await.unwrap_or_default();
        Err(status_error(status, &text).into())
    }
}

/// Map a non-success status to an [`ApiError`].
fn status_error(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(error_message(body, "Resource not found")),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(error_message(body, "Bad request"))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(error_message(body, &format!("Server error: {}", status)))
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

/// Pull a readable message out of a JSON:API error document.
///
/// Uses each error's `detail` (or `title`), falling back to the raw body.
fn error_message(body: &str, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorObject {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        detail: Option<String>,
    }

    #[derive(Deserialize)]
    struct ErrorDocument {
        errors: Vec<ErrorObject>,
    }

    if let Ok(doc) = serde_json::from_str::<ErrorDocument>(body) {
        let messages: Vec<String> = doc
            .errors
            .into_iter()
            .filter_map(|e| e.detail.or(e.title))
            .filter(|m| !m.is_empty())
            .collect();
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    let body = body.trim();
    if body.is_empty() {
        fallback.to_string()
    } else {
        body.to_string()
    }
}
