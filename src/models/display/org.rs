//! Organization display model

use tabled::Tabled;

use tfe_orgs::client::Organization;

/// Placeholder for values the server did not report
const NONE: &str = "-";

/// Organization display model for table output.
#[derive(Debug, Clone, Tabled)]
pub struct OrgDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "PLAN")]
    pub plan: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            name: org.name.clone(),
            email: org.email.clone().unwrap_or_else(|| NONE.to_string()),
            plan: org
                .enterprise_plan
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| NONE.to_string()),
            created: org
                .created_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| NONE.to_string()),
        }
    }
}

/// Label/value rows for the single-organization view.
pub fn org_details(org: &Organization) -> Vec<(&'static str, String)> {
    let or_none = |v: Option<String>| v.unwrap_or_else(|| NONE.to_string());

    let mut rows = vec![
        ("Name", org.name.clone()),
        ("Email", or_none(org.email.clone())),
        (
            "Auth policy",
            or_none(org.collaborator_auth_policy.clone()),
        ),
        (
            "Plan",
            or_none(org.enterprise_plan.map(|p| p.as_str().to_string())),
        ),
        ("Created", or_none(org.created_at.map(|t| t.to_rfc3339()))),
    ];

    if let Some(expires) = org.trial_expiry() {
        rows.push(("Trial expires", expires.to_rfc3339()));
    }

    let p = &org.permissions;
    let allowed: Vec<&str> = [
        (p.can_update, "update"),
        (p.can_destroy, "destroy"),
        (p.can_create_team, "create-team"),
        (p.can_create_workspace, "create-workspace"),
        (p.can_update_oauth, "update-oauth"),
        (p.can_update_api_token, "update-api-token"),
        (p.can_access_via_teams, "access-via-teams"),
    ]
    .into_iter()
    .filter_map(|(allowed, name)| allowed.then_some(name))
    .collect();

    rows.push((
        "Permissions",
        if allowed.is_empty() {
            NONE.to_string()
        } else {
            allowed.join(", ")
        },
    ));

    rows
}
