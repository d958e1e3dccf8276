//! Coffee shop environment - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coffee_shop_config::{
    cli::{Cli, Commands},
    commands,
    errors::ConfigResult,
};

fn main() {
    // Values from .env must be visible to clap's `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ConfigResult<()> {
    if let Commands::Targets = cli.command {
        commands::targets::execute();
        return Ok(());
    }

    let loader = commands::loader(&cli);
    if let Commands::Check = cli.command {
        return commands::check::execute(loader);
    }

    // Fail before any command reads the record
    let config = loader.load()?;
    tracing::debug!("Configuration loaded");

    match cli.command {
        Commands::Show => commands::show::execute(&config),
        Commands::Url(args) => {
            commands::url::execute(args, &config);
            Ok(())
        }
        Commands::Login => commands::login::execute(&config),
        Commands::Check | Commands::Targets => Ok(()),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose))
        .init();
}

/// Verbose mode forces debug; otherwise `RUST_LOG`, falling back to info.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
