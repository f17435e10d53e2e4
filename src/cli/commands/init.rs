//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mascara.toml")]
    pub output: String,

    /// Include comments explaining every option
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Mascara configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: mascara validate-config");
                println!("  3. Try it: mascara mask \"Meu CPF é 123.456.789-09\"");
                println!("  4. Anonymize a spreadsheet: mascara anonymize clientes.xlsx");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Mascara Configuration File

[application]
log_level = "info"

[anonymization]
accepted_labels = ["person", "organization", "location", "geo-political-entity"]
recognizer = "gazetteer"
parallel = false
dry_run = false

[output]
file_name = "planilha_anonimizada.xlsx"
preview_rows = 10

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with comments
    fn generate_config_with_examples() -> String {
        r#"# Mascara Configuration File
#
# Every setting has a default; delete what you don't need.
# Values may reference environment variables with ${VAR_NAME}, and any
# setting can be overridden with MASCARA_<SECTION>_<KEY>.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Detection and Masking
# ============================================================================
[anonymization]
# Recognizer labels that are masked. Pattern matches (CPF, RG, CNPJ, phone,
# email, passport, payment card) are always masked.
# Options: person, organization, location, geo-political-entity, miscellaneous
accepted_labels = ["person", "organization", "location", "geo-political-entity"]

# Entity recognizer: "gazetteer" (names and places) or "patterns_only"
recognizer = "gazetteer"

# Replacement gazetteer (first_names, locations, geo_political, organizations, ...)
# gazetteer = "/etc/mascara/gazetteer.toml"

# Replacement pattern library ([[patterns]] label = "...", pattern = '...')
# pattern_library = "/etc/mascara/patterns.toml"

# Mask table rows in parallel
parallel = false

# Detect and report without writing output
dry_run = false

# ============================================================================
# Output
# ============================================================================
[output]
# Workbook written when anonymize is run without --output
file_name = "planilha_anonimizada.xlsx"

# Rows shown in the console preview (0 disables it)
preview_rows = 10

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Rotation: daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MascaraConfig;

    #[test]
    fn test_generated_configs_parse_and_validate() {
        for content in [
            InitArgs::generate_minimal_config(),
            InitArgs::generate_config_with_examples(),
        ] {
            let config: MascaraConfig = toml::from_str(&content).unwrap();
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mascara.toml");
        std::fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().unwrap(), EXIT_CONFIG);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().unwrap(), 0);
        assert!(std::fs::read_to_string(&path).unwrap().contains("[anonymization]"));
    }
}
