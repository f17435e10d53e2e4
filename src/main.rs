// Mascara - PII detection and masking for text and spreadsheets
// Copyright (c) 2025 Mascara Contributors
// Licensed under the MIT License

use mascara::cli::{Cli, Commands};
use mascara::config::{load_config_or_default, LoggingConfig};
use mascara::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Commands report config errors themselves; logging falls back to defaults
    let (logging_config, configured_level) = match load_config_or_default(&cli.config) {
        Ok(config) => (config.logging, config.application.log_level),
        Err(_) => (LoggingConfig::default(), "info".to_string()),
    };
    let log_level = cli.log_level.as_deref().unwrap_or(&configured_level);

    let guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Mascara - PII detection and masking"
    );

    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    // process::exit skips destructors, so flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Mask(args) => args.execute(&cli.config),
        Commands::Anonymize(args) => args.execute(&cli.config),
        Commands::Patterns(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
