//! Targets command - Lists deployment targets and their presets.

use crate::config::{preset, DeploymentTarget};

/// Execute the targets command
pub fn execute() {
    for target in DeploymentTarget::ALL {
        let layer = preset(target);
        println!(
            "{:<12} {}",
            target,
            layer.api_server_url.as_deref().unwrap_or("-")
        );
    }
}
