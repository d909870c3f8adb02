//! Command execution context
//!
//! Loads configuration, applies overrides and builds the API client once so
//! command handlers don't repeat the setup.

use tfe_orgs::{Client, Config, Organizations, Result};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Context for command execution containing config, client and output format.
pub struct CommandContext {
    /// Loaded configuration with overrides applied
    pub config: Config,
    /// HTTP-backed API client
    pub client: Client,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be parsed or no API token is
    /// available from any source.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?
            .with_overrides(opts.address.clone(), opts.token.clone());

        let client = Client::new(&config)?;
        log::debug!("Using API at {}", config.address);

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Organization operations
    pub fn organizations(&self) -> Organizations<tfe_orgs::HttpTransport> {
        self.client.organizations()
    }
}
