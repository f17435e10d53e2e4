//! Pattern catalog for structured identifiers

use crate::anonymization::models::PiiLabel;
use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::path::Path;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// PII label (kebab-case key or short tag)
    pub label: String,
    /// Regular expression source
    pub pattern: String,
    /// Free-form note shown by `mascara patterns`
    #[serde(default)]
    pub description: Option<String>,
}

/// Compiled pattern with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Compiled, case-insensitive regex
    pub regex: Regex,
    /// PII label
    pub label: PiiLabel,
    /// Optional description
    pub description: Option<String>,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

/// Ordered catalog of labeled regular expressions
///
/// Order matters: patterns run, and their matches are reported, in the
/// order they were declared.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<CompiledPattern>,
}

impl PatternCatalog {
    /// Load a catalog from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Load a catalog from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        if library.patterns.is_empty() {
            anyhow::bail!("Pattern library defines no patterns");
        }

        let patterns = library
            .patterns
            .into_iter()
            .enumerate()
            .map(|(idx, def)| Self::compile(idx, def))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Built-in catalog (CPF, RG, CNPJ, phone, email, passport, card)
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../../../patterns/pii_patterns.toml");
        Self::from_toml(default_toml)
    }

    fn compile(idx: usize, def: PatternDefinition) -> Result<CompiledPattern> {
        let label: PiiLabel = def
            .label
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .with_context(|| format!("Invalid label in pattern #{}", idx + 1))?;

        if !label.is_pattern_label() {
            anyhow::bail!(
                "Pattern #{} uses recognizer label '{}'; catalog labels must describe structured identifiers",
                idx + 1,
                def.label
            );
        }

        let regex = RegexBuilder::new(&def.pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Invalid regex in pattern #{}: {}", idx + 1, def.pattern))?;

        Ok(CompiledPattern {
            regex,
            label,
            description: def.description,
        })
    }

    /// All patterns, in declaration order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Patterns carrying a given label, in declaration order
    pub fn patterns_for_label(&self, label: PiiLabel) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter().filter(move |p| p.label == label)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
