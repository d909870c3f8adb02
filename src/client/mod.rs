//! Organizations API client

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::Result;

pub mod http;
pub mod jsonapi;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod organizations;
pub mod request;
pub mod validation;

pub use http::HttpTransport;
#[cfg(test)]
pub use mock::MockTransport;
pub use models::{EnterprisePlan, Organization, Permissions};
pub use organizations::{
    CreateOrganizationInput, DeleteOrganizationInput, ModifyOrganizationInput, Organizations,
};
pub use request::{ListOptions, Request, Response};

/// Executes API requests on behalf of the resource clients.
///
/// Implementations send the request, check the status and hand back the raw
/// body of a successful response. Errors are returned to the caller untouched,
/// so implementations decide how failures are classified.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a single request.
    async fn execute(&self, request: Request) -> Result<Response>;
}

/// Entry point bundling a shared transport.
#[derive(Debug)]
pub struct Client<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl Client<HttpTransport> {
    /// Create a client talking HTTP to the configured address.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::from_config(
            config,
        )?)))
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over an existing transport.
    pub fn with_transport(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Organization operations
    pub fn organizations(&self) -> Organizations<T> {
        Organizations::new(Arc::clone(&self.transport))
    }
}
