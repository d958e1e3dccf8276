//! The environment configuration record.
//!
//! Values are validated and normalized once, in the constructors, and can
//! only be read afterwards.

use serde::Serialize;
use url::Url;
use validator::{Validate, ValidationErrors};

use super::constants::{
    FIELD_API_SERVER_URL, FIELD_AUTH_AUDIENCE, FIELD_AUTH_CALLBACK_URL, FIELD_AUTH_CLIENT_ID,
    FIELD_AUTH_DOMAIN,
};
use crate::endpoints::LoginParams;
use crate::errors::{ConfigError, ConfigResult};

/// Identity-provider settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    #[validate(length(min = 1))]
    domain: String,
    #[validate(length(min = 1))]
    audience: String,
    #[validate(length(min = 1))]
    client_id: String,
    #[validate(length(min = 1), url)]
    callback_url: String,
}

impl AuthSettings {
    /// Collect identity-provider values. Validation happens when the
    /// enclosing [`EnvironmentConfig`] is built.
    pub fn new(
        domain: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            domain: trimmed(domain.into()),
            audience: trimmed(audience.into()),
            client_id: trimmed(client_id.into()),
            callback_url: trimmed(callback_url.into()),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    fn check(&self) -> ConfigResult<()> {
        if let Err(errors) = self.validate() {
            return Err(first_error(
                &errors,
                &[
                    ("domain", FIELD_AUTH_DOMAIN),
                    ("audience", FIELD_AUTH_AUDIENCE),
                    ("client_id", FIELD_AUTH_CLIENT_ID),
                    ("callback_url", FIELD_AUTH_CALLBACK_URL),
                ],
            ));
        }

        let callback = parse_url(&self.callback_url, FIELD_AUTH_CALLBACK_URL)?;
        require_host(&callback, FIELD_AUTH_CALLBACK_URL)
    }
}

/// Environment configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    production: bool,
    #[validate(length(min = 1), url)]
    api_server_url: String,
    auth: AuthSettings,
}

impl EnvironmentConfig {
    /// Validate and build a configuration.
    ///
    /// Trailing slashes are stripped from `api_server_url` so collaborators
    /// can append `/<path>` directly.
    pub fn new(
        production: bool,
        api_server_url: impl Into<String>,
        auth: AuthSettings,
    ) -> ConfigResult<Self> {
        let config = Self {
            production,
            api_server_url: trimmed(api_server_url.into()),
            auth,
        };

        if let Err(errors) = config.validate() {
            return Err(first_error(
                &errors,
                &[("api_server_url", FIELD_API_SERVER_URL)],
            ));
        }

        let base = parse_url(&config.api_server_url, FIELD_API_SERVER_URL)?;
        require_host(&base, FIELD_API_SERVER_URL)?;
        if base.query().is_some() || base.fragment().is_some() {
            return Err(ConfigError::invalid_url(
                FIELD_API_SERVER_URL,
                "base URL must not carry a query or fragment",
            ));
        }

        config.auth.check()?;

        let api_server_url = config.api_server_url.trim_end_matches('/').to_string();
        Ok(Self {
            api_server_url,
            ..config
        })
    }

    pub fn production(&self) -> bool {
        self.production
    }

    /// Backend base URL, without a trailing slash
    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth(&self) -> &AuthSettings {
        &self.auth
    }

    /// Values handed to the authentication collaborator, unmodified.
    pub fn login_params(&self) -> LoginParams<'_> {
        LoginParams {
            domain: self.auth.domain(),
            audience: self.auth.audience(),
            client_id: self.auth.client_id(),
            callback_url: self.auth.callback_url(),
        }
    }
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

/// Map validator output to the first failing field, in declaration order.
fn first_error(errors: &ValidationErrors, fields: &[(&str, &'static str)]) -> ConfigError {
    let field_errors = errors.field_errors();

    for &(name, field) in fields {
        let Some(errs) = field_errors.get(name) else {
            continue;
        };

        if errs.iter().any(|e| e.code == "length") {
            return ConfigError::Empty { field };
        }
        if let Some(err) = errs.first() {
            return ConfigError::invalid_url(field, err.code.to_string());
        }
    }

    ConfigError::invalid("configuration", errors.to_string())
}

fn parse_url(raw: &str, field: &'static str) -> ConfigResult<Url> {
    Url::parse(raw).map_err(|e| ConfigError::invalid_url(field, e.to_string()))
}

fn require_host(url: &Url, field: &'static str) -> ConfigResult<()> {
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::invalid_url(field, "URL must be absolute with a host")),
    }
}
