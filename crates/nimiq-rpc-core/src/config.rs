//! Client configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default port of the Nimiq node's JSON-RPC server
pub const DEFAULT_PORT: u16 = 8648;

/// Connection settings for a node's JSON-RPC endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl ClientConfig {
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
        }
    }

    /// Load the configuration from a JSON file.
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ClientConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let valid_schemes = ["http", "https"];
        if !valid_schemes.contains(&self.scheme.as_str()) {
            return Err(Error::Validation(format!(
                "Invalid scheme '{}'. Must be one of: {}",
                self.scheme,
                valid_schemes.join(", ")
            )));
        }

        if self.host.trim().is_empty() {
            return Err(Error::Validation("Host cannot be empty".to_string()));
        }

        if self.port == 0 {
            return Err(Error::Validation(
                "Port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether any basic-auth credentials are configured
    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() || !self.password.is_empty()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            user: String::new(),
            password: String::new(),
        }
    }
}
