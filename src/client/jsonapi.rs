//! JSON:API document envelopes
//!
//! Organizations travel inside JSON:API documents: a single resource is
//! `{"data": {"type": "organizations", "attributes": {...}}}` and a collection
//! wraps an array of such objects. Organizations are keyed by name, so the
//! resource `id` is never sent and is ignored on the way back.
//!
//! The adapter functions here are the only place where wire attributes and the
//! domain [`Organization`] meet.

use serde::{Deserialize, Serialize};

use super::models::{Organization, OrganizationAttributes};
use crate::error::{ApiError, Result};

/// Resource type tag for organizations
pub const ORGANIZATIONS_TYPE: &str = "organizations";

/// Top-level JSON:API document.
///
/// Members other than `data` (`links`, `meta`, `included`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<D> {
    pub data: D,
}

/// A JSON:API resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject<A> {
    /// Resource type tag
    #[serde(rename = "type")]
    pub kind: String,

    /// Resource identifier, unused for organizations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Resource attributes. A resource object may leave them out entirely.
    #[serde(default)]
    pub attributes: A,
}

/// Single-organization document
pub type OrganizationDocument = Document<ResourceObject<OrganizationAttributes>>;

/// Organization collection document
pub type OrganizationsDocument = Document<Vec<ResourceObject<OrganizationAttributes>>>;

/// Wrap write attributes into a single-resource document.
pub fn to_wire_envelope(attributes: OrganizationAttributes) -> OrganizationDocument {
    Document {
        data: ResourceObject {
            kind: ORGANIZATIONS_TYPE.to_string(),
            id: None,
            attributes,
        },
    }
}

/// Unwrap a single-resource document into an [`Organization`].
pub fn from_wire_envelope(document: OrganizationDocument) -> Result<Organization> {
    from_resource(document.data)
}

/// Unwrap a collection document, keeping the server's order.
pub fn from_wire_collection(document: OrganizationsDocument) -> Result<Vec<Organization>> {
    document.data.into_iter().map(from_resource).collect()
}

fn from_resource(resource: ResourceObject<OrganizationAttributes>) -> Result<Organization> {
    if resource.kind != ORGANIZATIONS_TYPE {
        return Err(ApiError::InvalidResponse(format!(
            "Expected resource type '{}', got '{}'",
            ORGANIZATIONS_TYPE, resource.kind
        ))
        .into());
    }

    let attrs = resource.attributes;

    // The server uses the name as id; fall back to it if the attribute is missing.
    let name = attrs.name.or(resource.id).ok_or_else(|| {
        ApiError::InvalidResponse("Organization without a name".to_string())
    })?;

    Ok(Organization {
        name,
        email: attrs.email,
        collaborator_auth_policy: attrs.collaborator_auth_policy,
        enterprise_plan: attrs.enterprise_plan,
        created_at: attrs.created_at,
        trial_expires_at: attrs.trial_expires_at,
        permissions: attrs.permissions.unwrap_or_default(),
    })
}
