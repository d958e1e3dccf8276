//! Url command - Builds a backend URL against the configured base.

use crate::cli::args::UrlArgs;
use crate::config::EnvironmentConfig;
use crate::endpoints::ApiEndpoints;

/// Execute the url command
pub fn execute(args: UrlArgs, config: &EnvironmentConfig) {
    println!("{}", ApiEndpoints::new(config).url_for(&args.path));
}
