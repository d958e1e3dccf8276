//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `show` - Print the loaded configuration
//! - `check` - Validate the configuration
//! - `targets` - List deployment targets
//! - `url` - Build a backend URL
//! - `login` - Print identity-provider values

pub mod args;

pub use args::{Cli, Commands};
