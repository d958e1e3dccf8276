//! Partial configuration layers merged before validation.
//!
//! A layer may come from a preset, a JSON file or the environment. Any field
//! may be absent; the merged result must be complete.

use serde::{Deserialize, Serialize};

use super::constants::{
    ENV_API_SERVER_URL, ENV_AUTH0_AUDIENCE, ENV_AUTH0_CALLBACK_URL, ENV_AUTH0_CLIENT_ID,
    ENV_AUTH0_DOMAIN, ENV_PRODUCTION, FIELD_API_SERVER_URL, FIELD_AUTH_AUDIENCE,
    FIELD_AUTH_CALLBACK_URL, FIELD_AUTH_CLIENT_ID, FIELD_AUTH_DOMAIN, FIELD_PRODUCTION,
};
use super::settings::{AuthSettings, EnvironmentConfig};
use crate::errors::{ConfigError, ConfigResult};

/// Identity-provider settings, any of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialAuth {
    #[serde(alias = "url", skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(alias = "callbackURL", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// Environment configuration, any field of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialEnvironment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_server_url: Option<String>,
    #[serde(default, alias = "auth0")]
    pub auth: PartialAuth,
}

impl PartialAuth {
    fn merge(&mut self, other: PartialAuth) {
        overlay(&mut self.domain, other.domain);
        overlay(&mut self.audience, other.audience);
        overlay(&mut self.client_id, other.client_id);
        overlay(&mut self.callback_url, other.callback_url);
    }
}

impl PartialEnvironment {
    /// Parse a JSON layer.
    pub fn from_json(input: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build a layer from environment variables read through `lookup`.
    ///
    /// Unset variables leave the field absent; lookup errors abort the load.
    pub fn from_env_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&'static str) -> ConfigResult<Option<String>>,
    {
        let production = lookup(ENV_PRODUCTION)?
            .map(|raw| parse_flag(&raw))
            .transpose()?;

        Ok(Self {
            production,
            api_server_url: lookup(ENV_API_SERVER_URL)?,
            auth: PartialAuth {
                domain: lookup(ENV_AUTH0_DOMAIN)?,
                audience: lookup(ENV_AUTH0_AUDIENCE)?,
                client_id: lookup(ENV_AUTH0_CLIENT_ID)?,
                callback_url: lookup(ENV_AUTH0_CALLBACK_URL)?,
            },
        })
    }

    /// Overlay `other` on top of this layer; fields present in `other` win.
    pub fn merge(&mut self, other: PartialEnvironment) {
        overlay(&mut self.production, other.production);
        overlay(&mut self.api_server_url, other.api_server_url);
        self.auth.merge(other.auth);
    }

    /// Require every field and build a validated configuration.
    pub fn into_config(self) -> ConfigResult<EnvironmentConfig> {
        let production = require(self.production, FIELD_PRODUCTION)?;
        let api_server_url = require(self.api_server_url, FIELD_API_SERVER_URL)?;
        let auth = AuthSettings::new(
            require(self.auth.domain, FIELD_AUTH_DOMAIN)?,
            require(self.auth.audience, FIELD_AUTH_AUDIENCE)?,
            require(self.auth.client_id, FIELD_AUTH_CLIENT_ID)?,
            require(self.auth.callback_url, FIELD_AUTH_CALLBACK_URL)?,
        );

        EnvironmentConfig::new(production, api_server_url, auth)
    }
}

fn overlay<T>(base: &mut Option<T>, top: Option<T>) {
    if top.is_some() {
        *base = top;
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> ConfigResult<T> {
    value.ok_or(ConfigError::Missing { field })
}

fn parse_flag(raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(
            FIELD_PRODUCTION,
            format!("expected a boolean, got `{}`", other),
        )),
    }
}
