//! Read-only views handed to the HTTP and authentication collaborators.

use serde::Serialize;

use crate::config::{EnvironmentConfig, ROUTE_DRINKS, ROUTE_DRINKS_DETAIL};

/// Builds backend URLs against the configured base.
#[derive(Debug, Clone, Copy)]
pub struct ApiEndpoints<'a> {
    base: &'a str,
}

impl<'a> ApiEndpoints<'a> {
    pub fn new(config: &'a EnvironmentConfig) -> Self {
        Self {
            base: config.api_server_url(),
        }
    }

    pub fn base(&self) -> &'a str {
        self.base
    }

    /// `<base>/<path>` with exactly one slash between the two.
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.base.to_string();
        }
        format!("{}/{}", self.base, path)
    }

    pub fn drinks(&self) -> String {
        self.url_for(ROUTE_DRINKS)
    }

    pub fn drinks_detail(&self) -> String {
        self.url_for(ROUTE_DRINKS_DETAIL)
    }

    /// Single drink, used for PATCH and DELETE
    pub fn drink(&self, id: u64) -> String {
        self.url_for(&format!("{}/{}", ROUTE_DRINKS, id))
    }
}

/// Identity-provider values passed to the login-initiation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams<'a> {
    pub domain: &'a str,
    pub audience: &'a str,
    pub client_id: &'a str,
    pub callback_url: &'a str,
}
