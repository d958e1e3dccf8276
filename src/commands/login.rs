//! Login command - Prints the values handed to the identity provider.

use crate::config::EnvironmentConfig;
use crate::errors::ConfigResult;

/// Execute the login command
pub fn execute(config: &EnvironmentConfig) -> ConfigResult<()> {
    println!("{}", serde_json::to_string_pretty(&config.login_params())?);
    Ok(())
}
