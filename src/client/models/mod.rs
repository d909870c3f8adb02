//! API data models
//!
//! Domain types returned by the client, plus the wire-side attribute structs
//! they are decoded from.

mod org;

pub use org::{EnterprisePlan, Organization, OrganizationAttributes, Permissions};
