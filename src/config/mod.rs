//! Configuration management for Mascara.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Mascara uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MASCARA_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mascara::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("mascara.toml")?;
//!
//! println!("Recognizer: {:?}", config.anonymization.recognizer);
//! println!("Output: {}", config.output.file_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`AnonymizationConfig`](crate::anonymization::AnonymizationConfig) - Labels, recognizer, catalog
//! - [`OutputConfig`] - Output workbook name and preview size
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [anonymization]
//! accepted_labels = ["person", "organization", "location", "geo-political-entity"]
//! recognizer = "gazetteer"
//! gazetteer = "${MASCARA_GAZETTEER_PATH}"
//! parallel = true
//!
//! [output]
//! file_name = "planilha_anonimizada.xlsx"
//! preview_rows = 10
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, MascaraConfig, OutputConfig};
