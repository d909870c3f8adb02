//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod org;

pub use args::{OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// tfe-orgs - manage Terraform Enterprise organizations
#[derive(Parser, Debug)]
#[command(name = "tfe-orgs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "TFE_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "TFE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Server address (e.g. https://app.terraform.io)
    #[arg(long, global = true, env = "TFE_ADDRESS", hide_env = true)]
    pub address: Option<String>,

    /// API token
    #[arg(
        long,
        global = true,
        env = "TFE_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TFE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Display version information
    Version,
}

/// Organization management subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations visible to the API token
    List {
        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show a single organization
    Get {
        /// Organization name
        name: String,
    },

    /// Create an organization
    Create {
        /// Organization name (letters, digits, '-', '_', '.')
        name: String,

        /// Contact email address
        #[arg(long, short = 'e')]
        email: String,

        /// Validate and show what would be created without calling the API
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete an organization
    Delete {
        /// Organization name
        name: String,

        /// Validate and show what would be deleted without calling the API
        #[arg(long)]
        dry_run: bool,
    },

    /// Change an organization's name or email
    Modify {
        /// Organization to modify
        name: String,

        /// New organization name
        #[arg(long)]
        rename: Option<String>,

        /// New contact email address
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Validate and show the change without calling the API
        #[arg(long)]
        dry_run: bool,
    },
}
