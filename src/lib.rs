//! Typed client for the organizations resource of the Terraform Enterprise API
//!
//! The crate maps typed inputs onto JSON:API documents, validates them before
//! anything is sent, and hands each request to a [`client::Transport`]. The
//! bundled [`client::HttpTransport`] talks to a real server over reqwest; tests
//! and embedders can supply their own.
//!
//! ```ignore
//! let config = Config::load_at(None)?;
//! let client = Client::new(&config)?;
//! let org = client
//!     .organizations()
//!     .create(CreateOrganizationInput::new("acme", "ops@acme.io"))
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{
    Client, CreateOrganizationInput, DeleteOrganizationInput, HttpTransport, ListOptions,
    ModifyOrganizationInput, Organization, Organizations, Transport,
};
pub use config::Config;
pub use error::{ApiError, ConfigError, Error, Result, ValidationError};
