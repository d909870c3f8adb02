//! Organization operations
//!
//! Each operation follows the same steps: validate the typed input, wrap it
//! in a JSON:API document, hand it to the [`Transport`] and decode the reply.
//! Validation failures return before anything is sent; transport errors are
//! passed through unchanged.

use std::sync::Arc;

use log::debug;
use reqwest::Method;

use super::Transport;
use super::jsonapi::{self, OrganizationDocument, OrganizationsDocument};
use super::models::{Organization, OrganizationAttributes};
use super::request::{ListOptions, Request};
use super::validation::{valid_string, valid_string_id};
use crate::error::{Result, ValidationError};

/// Collection path for organizations
pub const ORGANIZATIONS_PATH: &str = "/api/v2/organizations";

/// Path of a single organization. `name` is appended verbatim.
fn organization_path(name: &str) -> String {
    format!("{}/{}", ORGANIZATIONS_PATH, name)
}

/// Validate a name used as a URL key.
fn check_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }
    if !valid_string_id(name) {
        return Err(ValidationError::invalid("name"));
    }
    Ok(())
}

/// Parameters for creating an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOrganizationInput {
    /// Organization name. Required, must be a valid identifier.
    pub name: String,

    /// Contact email. Required.
    pub email: String,
}

impl CreateOrganizationInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check that the input is sufficiently filled.
    pub fn valid(&self) -> std::result::Result<(), ValidationError> {
        check_name(&self.name)?;
        if !valid_string(&self.email) {
            return Err(ValidationError::required("email"));
        }
        Ok(())
    }
}

/// Parameters for deleting an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOrganizationInput {
    /// Organization to delete. Required.
    pub name: String,
}

impl DeleteOrganizationInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn valid(&self) -> std::result::Result<(), ValidationError> {
        check_name(&self.name)
    }
}

/// Parameters for modifying an organization.
///
/// Fields left as `None` keep their current value on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyOrganizationInput {
    /// Organization to modify. Required.
    pub name: String,

    /// New name for the organization
    pub rename: Option<String>,

    /// New contact email
    pub email: Option<String>,
}

impl ModifyOrganizationInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Rename the organization.
    pub fn rename(mut self, new_name: impl Into<String>) -> Self {
        self.rename = Some(new_name.into());
        self
    }

    /// Change the contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Only the target name is checked; `rename` and `email` are optional.
    pub fn valid(&self) -> std::result::Result<(), ValidationError> {
        check_name(&self.name)
    }
}

/// Organization operations over a shared transport.
#[derive(Debug)]
pub struct Organizations<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Organizations<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// List the organizations visible to the caller, in server order.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<Organization>> {
        debug!("Listing organizations ({:?})", options);

        let request =
            Request::new(Method::GET, ORGANIZATIONS_PATH).with_list_options(options.clone());
        let response = self.transport.execute(request).await?;

        let document: OrganizationsDocument = response.decode()?;
        jsonapi::from_wire_collection(document)
    }

    /// Fetch a single organization by name.
    pub async fn read(&self, name: &str) -> Result<Organization> {
        check_name(name)?;
        debug!("Reading organization {}", name);

        let request = Request::new(Method::GET, organization_path(name));
        let response = self.transport.execute(request).await?;

        let document: OrganizationDocument = response.decode()?;
        jsonapi::from_wire_envelope(document)
    }

    /// Create an organization.
    pub async fn create(&self, input: CreateOrganizationInput) -> Result<Organization> {
        input.valid()?;
        debug!("Creating organization {}", input.name);

        let document = jsonapi::to_wire_envelope(OrganizationAttributes {
            name: Some(input.name),
            email: Some(input.email),
            ..Default::default()
        });

        let request = Request::new(Method::POST, ORGANIZATIONS_PATH)
            .with_body(serde_json::to_value(&document)?);
        let response = self.transport.execute(request).await?;

        let document: OrganizationDocument = response.decode()?;
        jsonapi::from_wire_envelope(document)
    }

    /// Delete an organization. The response body is discarded.
    pub async fn delete(&self, input: DeleteOrganizationInput) -> Result<()> {
        input.valid()?;
        debug!("Deleting organization {}", input.name);

        let request = Request::new(Method::DELETE, organization_path(&input.name));
        self.transport.execute(request).await?;

        Ok(())
    }

    /// Modify an organization.
    ///
    /// `input.name` only selects the target; the document's `name` attribute
    /// carries `input.rename`.
    pub async fn modify(&self, input: ModifyOrganizationInput) -> Result<Organization> {
        input.valid()?;
        debug!("Modifying organization {}", input.name);

        let document = jsonapi::to_wire_envelope(OrganizationAttributes {
            name: input.rename,
            email: input.email,
            ..Default::default()
        });

        let request = Request::new(Method::PATCH, organization_path(&input.name))
            .with_body(serde_json::to_value(&document)?);
        let response = self.transport.execute(request).await?;

        let document: OrganizationDocument = response.decode()?;
        jsonapi::from_wire_envelope(document)
    }
}
