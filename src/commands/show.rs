//! Show command - Prints the loaded configuration.

use crate::config::EnvironmentConfig;
use crate::errors::ConfigResult;

/// Execute the show command
pub fn execute(config: &EnvironmentConfig) -> ConfigResult<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
