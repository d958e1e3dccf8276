//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DeploymentTarget;

/// Coffee shop environment configuration inspector
#[derive(Parser, Debug)]
#[command(name = "coffee-env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Deployment target (development, production)
    #[arg(short, long, global = true, default_value = "development", env = "APP_ENV")]
    pub target: DeploymentTarget,

    /// JSON file layered on top of the target preset
    #[arg(short, long, global = true, env = "ENV_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Ignore the field overrides (PRODUCTION, API_SERVER_URL, AUTH0_*);
    /// APP_ENV and ENV_CONFIG_PATH still apply
    #[arg(long, global = true)]
    pub no_env: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the loaded configuration as JSON
    Show,

    /// Validate the configuration and exit non-zero on failure
    Check,

    /// List known deployment targets
    Targets,

    /// Print a backend URL built against the configured base
    Url(UrlArgs),

    /// Print the identity-provider values used to start a login
    Login,
}

/// Arguments for the url command
#[derive(Parser, Debug)]
pub struct UrlArgs {
    /// Path appended to the API base (e.g., "drinks")
    pub path: String,
}
