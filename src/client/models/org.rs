//! Organization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization name. Globally unique within a server instance.
    pub name: String,

    /// Contact email address. The server may report none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Authentication required from collaborators (e.g. `password`, `two_factor_mandatory`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborator_auth_policy: Option<String>,

    /// Plan tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_plan: Option<EnterprisePlan>,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// End of the trial period. Only meaningful on the `trial` plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_expires_at: Option<DateTime<Utc>>,

    /// What the acting caller may do to this organization
    #[serde(default)]
    pub permissions: Permissions,
}

impl Organization {
    /// Trial expiry, reported only when the organization is on the trial plan.
    pub fn trial_expiry(&self) -> Option<DateTime<Utc>> {
        match self.enterprise_plan {
            Some(EnterprisePlan::Trial) => self.trial_expires_at,
            _ => None,
        }
    }
}

/// Plan tier of an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnterprisePlan {
    Trial,
    Pro,
    Premium,
    /// Any tier this client does not know about
    #[serde(other)]
    Unknown,
}

impl EnterprisePlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnterprisePlan::Trial => "trial",
            EnterprisePlan::Pro => "pro",
            EnterprisePlan::Premium => "premium",
            EnterprisePlan::Unknown => "unknown",
        }
    }
}

/// Capabilities of the acting caller on an organization.
///
/// Keys the server omits decode as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Permissions {
    pub can_update: bool,
    pub can_destroy: bool,
    pub can_create_team: bool,
    pub can_create_workspace: bool,
    pub can_update_oauth: bool,
    pub can_update_api_token: bool,
    pub can_access_via_teams: bool,
}

/// Wire-side attributes of an `organizations` resource object.
///
/// Every field is optional: on write an absent field is left out of the
/// document (the server keeps its current value), on read it means the server
/// did not report one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OrganizationAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaborator_auth_policy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_plan: Option<EnterprisePlan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_expires_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
}
