//! Check command - Validates the configuration for a target.

use crate::config::ConfigLoader;
use crate::errors::ConfigResult;

/// Execute the check command
pub fn execute(loader: ConfigLoader) -> ConfigResult<()> {
    let target = loader.target();
    tracing::debug!("Checking configuration for {}", target);

    loader.load()?;
    println!("{}: OK", target);
    Ok(())
}
