//! Display models for table and JSON output
//!
//! Display models transform API types into CLI-friendly rows with column
//! names suited to the terminal.

mod org;

pub use org::{OrgDisplay, org_details};
