//! Deployment targets and their preset configurations.

use std::fmt;
use std::str::FromStr;

use super::constants::{
    AUTH0_AUDIENCE, AUTH0_CLIENT_ID, AUTH0_DOMAIN, DEV_API_SERVER_URL, DEV_CALLBACK_URL,
    PROD_API_SERVER_URL, PROD_CALLBACK_URL,
};
use super::layer::{PartialAuth, PartialEnvironment};
use crate::errors::ConfigError;

/// Deployment targets enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeploymentTarget {
    #[default]
    Development,
    Production,
}

impl DeploymentTarget {
    /// All known targets, in display order
    pub const ALL: [DeploymentTarget; 2] =
        [DeploymentTarget::Development, DeploymentTarget::Production];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentTarget::Development => "development",
            DeploymentTarget::Production => "production",
        }
    }
}

impl FromStr for DeploymentTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(DeploymentTarget::Development),
            "production" | "prod" => Ok(DeploymentTarget::Production),
            _ => Err(ConfigError::UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Statically defined configuration for a deployment target.
pub fn preset(target: DeploymentTarget) -> PartialEnvironment {
    let (production, api_server_url, callback_url) = match target {
        DeploymentTarget::Development => (false, DEV_API_SERVER_URL, DEV_CALLBACK_URL),
        DeploymentTarget::Production => (true, PROD_API_SERVER_URL, PROD_CALLBACK_URL),
    };

    PartialEnvironment {
        production: Some(production),
        api_server_url: Some(api_server_url.to_string()),
        auth: PartialAuth {
            domain: Some(AUTH0_DOMAIN.to_string()),
            audience: Some(AUTH0_AUDIENCE.to_string()),
            client_id: Some(AUTH0_CLIENT_ID.to_string()),
            callback_url: Some(callback_url.to_string()),
        },
    }
}
