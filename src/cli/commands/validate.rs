//! Validate config command implementation
//!
//! This module implements the `validate-config` command. Besides parsing
//! the file, it loads the configured pattern library and gazetteer so that
//! errors surface here rather than on the first request.

use super::EXIT_CONFIG;
use crate::anonymization::detector::patterns::PatternCatalog;
use crate::anonymization::engine::build_recognizer;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let anonymization = &config.anonymization;

        let catalog = match anonymization.pattern_library {
            Some(ref path) => PatternCatalog::from_file(path),
            None => PatternCatalog::builtin(),
        };
        let catalog = match catalog {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Pattern library failed to load");
                println!("   Error: {e:#}");
                return Ok(EXIT_CONFIG);
            }
        };

        let recognizer = match build_recognizer(anonymization) {
            Ok(r) => r,
            Err(e) => {
                println!("❌ Entity recognizer failed to load");
                println!("   Error: {e:#}");
                return Ok(EXIT_CONFIG);
            }
        };

        let labels: Vec<&str> = anonymization.accepted_labels.iter().map(|l| l.label()).collect();

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Recognizer: {}", recognizer.name());
        println!("  Accepted Labels: {}", labels.join(", "));
        println!(
            "  Pattern Library: {} ({} patterns)",
            anonymization
                .pattern_library
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string()),
            catalog.len()
        );
        println!("  Parallel: {}", anonymization.parallel);
        println!("  Dry Run: {}", anonymization.dry_run);
        println!("  Output File: {}", config.output.file_name);
        println!("  Preview Rows: {}", config.output.preview_rows);
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_config_error() {
        let code = ValidateArgs {}.execute("/nonexistent/mascara.toml").unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[test]
    fn test_missing_gazetteer_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[anonymization]\ngazetteer = \"/nonexistent/nomes.toml\"").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let code = ValidateArgs {}.execute(&path).unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[test]
    fn test_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npreview_rows = 3").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let code = ValidateArgs {}.execute(&path).unwrap();
        assert_eq!(code, 0);
    }
}
