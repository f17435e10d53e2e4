//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MascaraConfig;
use crate::domain::errors::MascaraError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MascaraConfig
/// 4. Applies environment variable overrides (MASCARA_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use mascara::config::loader::load_config;
///
/// let config = load_config("mascara.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MascaraConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MascaraError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MascaraError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: MascaraConfig = toml::from_str(&contents)
        .map_err(|e| MascaraError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads configuration from a TOML file, falling back to defaults when the
/// file does not exist
///
/// Environment overrides and validation apply either way. A file that exists
/// but is invalid is still an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<MascaraConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        finish(MascaraConfig::default())
    }
}

fn finish(mut config: MascaraConfig) -> Result<MascaraConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MascaraError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MascaraError::Configuration(e.to_string()))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MascaraError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        MascaraError::Configuration(format!("Invalid value for {}: '{}'", name, value))
    })
}

/// Applies environment variable overrides using MASCARA_* prefix
///
/// Environment variables follow the pattern: MASCARA_<SECTION>_<KEY>
/// For example: MASCARA_OUTPUT_PREVIEW_ROWS, MASCARA_ANONYMIZATION_DRY_RUN
fn apply_env_overrides(config: &mut MascaraConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MASCARA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Anonymization overrides
    config
        .anonymization
        .apply_env_overrides()
        .map_err(|e| MascaraError::Configuration(format!("{:#}", e)))?;

    // Output overrides
    if let Ok(val) = std::env::var("MASCARA_OUTPUT_FILE_NAME") {
        config.output.file_name = val;
    }
    if let Ok(val) = std::env::var("MASCARA_OUTPUT_PREVIEW_ROWS") {
        config.output.preview_rows = parse_env("MASCARA_OUTPUT_PREVIEW_ROWS", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MASCARA_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("MASCARA_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("MASCARA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MASCARA_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
