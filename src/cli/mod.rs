//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Mascara using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Mascara - PII masking for free text and spreadsheets
#[derive(Parser, Debug)]
#[command(name = "mascara")]
#[command(version, about, long_about = None)]
#[command(author = "Mascara Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "mascara.toml", env = "MASCARA_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MASCARA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mask PII in a text and list the entities found
    Mask(commands::mask::MaskArgs),

    /// Mask every text cell of an .xlsx or .csv file
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// List the pattern catalog in evaluation order
    Patterns(commands::patterns::PatternsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_mask() {
        let cli = Cli::parse_from(["mascara", "mask", "Maria Silva"]);
        assert_eq!(cli.config, "mascara.toml");
        match cli.command {
            Commands::Mask(args) => {
                assert_eq!(args.text, "Maria Silva");
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["mascara", "--config", "custom.toml", "patterns"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Patterns(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["mascara", "--log-level", "debug", "patterns"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_anonymize() {
        let cli = Cli::parse_from([
            "mascara",
            "anonymize",
            "clientes.xlsx",
            "--output",
            "saida.xlsx",
            "--preview",
            "5",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Anonymize(args) => {
                assert_eq!(args.file.to_str(), Some("clientes.xlsx"));
                assert_eq!(args.output.as_deref().and_then(|p| p.to_str()), Some("saida.xlsx"));
                assert_eq!(args.preview, Some(5));
                assert!(args.dry_run);
                assert!(args.report.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["mascara", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["mascara", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref a) if a.force));
    }
}
