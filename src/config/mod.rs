//! Configuration management
//!
//! Settings come from a YAML file (default `~/.tfe-orgs/config.yaml`). The CLI
//! layers flag and environment overrides on top via [`Config::with_overrides`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default server address
pub const DEFAULT_ADDRESS: &str = "https://app.terraform.io";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Server address
    #[serde(default = "default_address")]
    pub address: String,

    /// API token
    #[serde(default)]
    pub token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preferences {
    /// Default page size for list requests
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_page_size() -> usize {
    20
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: default_address(),
            token: None,
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".tfe-orgs").join("config.yaml"))
    }

    /// Load configuration from `path`, or the default path when `None`.
    ///
    /// A missing file is not an error: defaults are returned so that flags and
    /// environment variables alone are enough to run.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => Self::load_from(&Self::default_path()?),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Apply address/token overrides (CLI flags or environment).
    pub fn with_overrides(mut self, address: Option<String>, token: Option<String>) -> Self {
        if let Some(address) = address {
            self.address = address;
        }
        if token.is_some() {
            self.token = token;
        }
        self
    }

    /// Return the API token, failing if none is configured.
    pub fn validate_auth(&self) -> Result<&str> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken.into()),
        }
    }
}
