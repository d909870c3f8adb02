//! Transport-level request and response values
//!
//! A [`Request`] carries everything a transport needs to perform one call:
//! method, path, an optional JSON:API body and optional paging options. The
//! transport answers with a raw [`Response`] that the caller decodes itself.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Paging options passed through to list endpoints.
///
/// Nothing here is interpreted by the client; the values are forwarded to the
/// server as `page[number]` and `page[size]` query parameters.
///
/// # Example
/// ```ignore
/// let options = ListOptions::new().page_number(2).page_size(50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page number to fetch (1-indexed on the server side)
    pub page_number: Option<usize>,
    /// Number of items per page
    pub page_size: Option<usize>,
}

impl ListOptions {
    /// Create empty list options (server defaults apply).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page_number(mut self, page: usize) -> Self {
        self.page_number = Some(page);
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Convert to query string parameters.
    ///
    /// Only the options that are set are emitted.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page_number {
            params.push(("page[number]", page.to_string()));
        }

        if let Some(size) = self.page_size {
            params.push(("page[size]", size.to_string()));
        }

        params
    }

    /// Check if any paging option is set.
    pub fn is_empty(&self) -> bool {
        self.page_number.is_none() && self.page_size.is_none()
    }
}

/// A single API call to be executed by a [`Transport`](super::Transport).
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Absolute API path, e.g. `/api/v2/organizations`
    pub path: String,
    /// Encoded JSON:API document to send as the request body
    pub body: Option<serde_json::Value>,
    /// Paging options for list endpoints
    pub list_options: Option<ListOptions>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            list_options: None,
        }
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach paging options.
    pub fn with_list_options(mut self, options: ListOptions) -> Self {
        self.list_options = Some(options);
        self
    }
}

/// Raw response returned by a transport for a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Undecoded response body
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}
