//! Anonymization configuration

use crate::anonymization::models::PiiLabel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which entity recognizer to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerKind {
    /// Rule-based recognizer backed by name and place lists
    #[default]
    Gazetteer,
    /// Tokenize only; rely on the pattern catalog
    PatternsOnly,
}

impl std::str::FromStr for RecognizerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "gazetteer" => Ok(Self::Gazetteer),
            "patterns_only" => Ok(Self::PatternsOnly),
            other => Err(format!(
                "Invalid recognizer '{}'. Must be one of: gazetteer, patterns_only",
                other
            )),
        }
    }
}

/// Anonymization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Recognizer labels that are masked; pattern labels are always masked
    #[serde(default = "default_accepted_labels")]
    pub accepted_labels: Vec<PiiLabel>,

    /// Recognizer implementation
    #[serde(default)]
    pub recognizer: RecognizerKind,

    /// Replacement gazetteer TOML file (built-in lists when unset)
    #[serde(default)]
    pub gazetteer: Option<PathBuf>,

    /// Replacement pattern library TOML file (built-in catalog when unset)
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Mask table rows on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Dry-run mode (detect and report but leave cells untouched)
    #[serde(default)]
    pub dry_run: bool,
}

fn default_accepted_labels() -> Vec<PiiLabel> {
    PiiLabel::DEFAULT_ACCEPTED.to_vec()
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            accepted_labels: default_accepted_labels(),
            recognizer: RecognizerKind::default(),
            gazetteer: None,
            pattern_library: None,
            parallel: false,
            dry_run: false,
        }
    }
}

fn check_toml_file(kind: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("{} file not found: {}", kind, path.display());
    }
    if path.extension().and_then(|s| s.to_str()) != Some("toml") {
        anyhow::bail!("{} must be a TOML file: {}", kind, path.display());
    }
    Ok(())
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref path) = self.pattern_library {
            check_toml_file("Pattern library", path)?;
        }

        if let Some(ref path) = self.gazetteer {
            check_toml_file("Gazetteer", path)?;
            if self.recognizer == RecognizerKind::PatternsOnly {
                tracing::warn!(
                    path = %path.display(),
                    "Gazetteer configured but recognizer is patterns_only; it will be ignored"
                );
            }
        }

        if let Some(label) = self.accepted_labels.iter().find(|l| !l.is_recognizer_label()) {
            anyhow::bail!(
                "accepted_labels may only contain recognizer labels (PER, ORG, LOC, GPE, MISC), got '{}'",
                label
            );
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("MASCARA_ANONYMIZATION_ACCEPTED_LABELS") {
            self.accepted_labels = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<PiiLabel>().map_err(anyhow::Error::msg))
                .collect::<Result<Vec<_>>>()
                .context("Invalid MASCARA_ANONYMIZATION_ACCEPTED_LABELS value")?;
        }

        if let Ok(val) = std::env::var("MASCARA_ANONYMIZATION_RECOGNIZER") {
            self.recognizer = val
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid MASCARA_ANONYMIZATION_RECOGNIZER value")?;
        }

        if let Ok(val) = std::env::var("MASCARA_ANONYMIZATION_GAZETTEER") {
            self.gazetteer = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("MASCARA_ANONYMIZATION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("MASCARA_ANONYMIZATION_PARALLEL") {
            self.parallel = val
                .parse()
                .context("Invalid MASCARA_ANONYMIZATION_PARALLEL value")?;
        }

        if let Ok(val) = std::env::var("MASCARA_ANONYMIZATION_DRY_RUN") {
            self.dry_run = val
                .parse()
                .context("Invalid MASCARA_ANONYMIZATION_DRY_RUN value")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnonymizationConfig::default();
        assert_eq!(config.accepted_labels, PiiLabel::DEFAULT_ACCEPTED.to_vec());
        assert_eq!(config.recognizer, RecognizerKind::Gazetteer);
        assert!(config.gazetteer.is_none());
        assert!(config.pattern_library.is_none());
        assert!(!config.parallel);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_config_validation() {
        let config = AnonymizationConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_pattern_library_rejected() {
        let config = AnonymizationConfig {
            pattern_library: Some(PathBuf::from("/nonexistent/patterns.toml")),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Pattern library file not found"));
    }

    #[test]
    fn test_pattern_label_not_accepted() {
        let config = AnonymizationConfig {
            accepted_labels: vec![PiiLabel::Person, PiiLabel::Email],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_section() {
        let config: AnonymizationConfig = toml::from_str(
            r#"
            accepted_labels = ["person", "miscellaneous"]
            recognizer = "patterns_only"
            parallel = true
            "#,
        )
        .unwrap();
        assert_eq!(
            config.accepted_labels,
            vec![PiiLabel::Person, PiiLabel::Miscellaneous]
        );
        assert_eq!(config.recognizer, RecognizerKind::PatternsOnly);
        assert!(config.parallel);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_recognizer_kind_from_str() {
        assert_eq!("Gazetteer".parse::<RecognizerKind>(), Ok(RecognizerKind::Gazetteer));
        assert_eq!(
            "patterns-only".parse::<RecognizerKind>(),
            Ok(RecognizerKind::PatternsOnly)
        );
        assert!("spacy".parse::<RecognizerKind>().is_err());
    }
}
