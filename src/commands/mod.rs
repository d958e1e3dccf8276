//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod check;
pub mod login;
pub mod show;
pub mod targets;
pub mod url;

use crate::cli::Cli;
use crate::config::{process_var, ConfigLoader};

/// Build the loader described by the global CLI flags.
pub fn loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new(cli.target);

    if let Some(path) = &cli.config {
        loader = loader.with_file(path.clone());
    }
    if !cli.no_env {
        loader = loader.with_env(process_var);
    }

    loader
}
