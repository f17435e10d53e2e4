//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) is a
//! valid configuration.

use crate::anonymization::AnonymizationConfig;
use crate::tabular::OUTPUT_FILE_NAME;
use serde::{Deserialize, Serialize};

/// Main Mascara configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MascaraConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Detection and masking settings
    #[serde(default)]
    pub anonymization: AnonymizationConfig,

    /// Output workbook settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MascaraConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.anonymization
            .validate()
            .map_err(|e| format!("anonymization: {:#}", e))?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Output workbook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name used when no output path is given
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Rows shown in the console preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file_name.trim().is_empty() {
            return Err("output.file_name cannot be empty".to_string());
        }
        if !self.file_name.to_lowercase().ends_with(".xlsx") {
            return Err(format!(
                "output.file_name '{}' must end with .xlsx",
                self.file_name
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_file_name() -> String {
    OUTPUT_FILE_NAME.to_string()
}

fn default_preview_rows() -> usize {
    10
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::{PiiLabel, RecognizerKind};

    #[test]
    fn test_default_config_is_valid() {
        let config = MascaraConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.file_name, "planilha_anonimizada.xlsx");
        assert_eq!(config.output.preview_rows, 10);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
        };

        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_config_validation() {
        let mut config = OutputConfig::default();
        assert!(config.validate().is_ok());

        config.file_name = "saida.csv".to_string();
        assert!(config.validate().is_err());

        config.file_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_full_file() {
        let config: MascaraConfig = toml::from_str(
            r#"
            [application]
            log_level = "debug"

            [anonymization]
            accepted_labels = ["person", "location"]
            recognizer = "patterns_only"
            dry_run = true

            [output]
            file_name = "saida.xlsx"
            preview_rows = 5

            [logging]
            local_enabled = true
            local_path = "/tmp/mascara-logs"
            local_rotation = "hourly"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(
            config.anonymization.accepted_labels,
            vec![PiiLabel::Person, PiiLabel::Location]
        );
        assert_eq!(config.anonymization.recognizer, RecognizerKind::PatternsOnly);
        assert!(config.anonymization.dry_run);
        assert_eq!(config.output.preview_rows, 5);
        assert_eq!(config.logging.local_rotation, "hourly");
    }

    #[test]
    fn test_parse_empty_file() {
        let config: MascaraConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
    }

    #[test]
    fn test_anonymization_errors_surface() {
        let config: MascaraConfig = toml::from_str(
            r#"
            [anonymization]
            accepted_labels = ["email"]
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("anonymization:"));
    }
}
