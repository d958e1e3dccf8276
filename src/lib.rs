//! Coffee shop environment configuration
//!
//! A typed, validated, read-only record of the values the coffee shop
//! frontend needs at startup: where the backend lives and how to start an
//! Auth0 login.
//!
//! # Modules
//!
//! - **config**: Deployment targets, layered loading and the configuration record
//! - **endpoints**: Views handed to the HTTP and authentication collaborators
//! - **errors**: Configuration errors
//! - **cli** / **commands**: The `coffee-env` inspector
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use coffee_shop_config::{ApiEndpoints, ConfigLoader, DeploymentTarget};
//!
//! let config = Arc::new(ConfigLoader::new(DeploymentTarget::Development).load()?);
//! let drinks = ApiEndpoints::new(&config).drinks();
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod endpoints;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{AuthSettings, ConfigLoader, DeploymentTarget, EnvironmentConfig, SharedConfig};
pub use endpoints::{ApiEndpoints, LoginParams};
pub use errors::{ConfigError, ConfigResult};
