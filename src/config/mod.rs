//! Application configuration module
//!
//! Handles deployment-target presets, layered loading and the immutable
//! configuration record.

mod constants;
mod layer;
mod loader;
mod settings;
mod target;

use std::sync::Arc;

pub use constants::*;
pub use layer::{PartialAuth, PartialEnvironment};
pub use loader::{process_var, ConfigLoader};
pub use settings::{AuthSettings, EnvironmentConfig};
pub use target::{preset, DeploymentTarget};

/// Configuration shared between collaborators
pub type SharedConfig = Arc<EnvironmentConfig>;
