//! Patterns command implementation

use super::EXIT_CONFIG;
use crate::anonymization::detector::patterns::PatternCatalog;
use crate::config::load_config_or_default;
use clap::Args;

/// Arguments for the patterns command
#[derive(Args, Debug)]
pub struct PatternsArgs {}

impl PatternsArgs {
    /// Execute the patterns command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let (catalog, source) = match config.anonymization.pattern_library {
            Some(ref path) => (PatternCatalog::from_file(path), path.display().to_string()),
            None => (PatternCatalog::builtin(), "built-in".to_string()),
        };
        let catalog = match catalog {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(EXIT_CONFIG);
            }
        };

        print!("{}", Self::format_catalog(&catalog, &source));
        Ok(0)
    }

    fn format_catalog(catalog: &PatternCatalog, source: &str) -> String {
        let mut output = format!("Pattern catalog ({}, {} patterns)\n\n", source, catalog.len());
        for (i, pattern) in catalog.all_patterns().iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. {:<12} {}\n",
                i + 1,
                pattern.label.label(),
                pattern.label.key()
            ));
            if let Some(ref description) = pattern.description {
                output.push_str(&format!("    {}\n", description));
            }
            output.push_str(&format!("    {}\n", pattern.regex.as_str()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_builtin_catalog() {
        let catalog = PatternCatalog::builtin().unwrap();
        let output = PatternsArgs::format_catalog(&catalog, "built-in");
        assert!(output.starts_with("Pattern catalog (built-in, 8 patterns)"));

        let primary = output.find("tax-id-primary").unwrap();
        let card = output.find("payment-card").unwrap();
        assert!(primary < card);
    }
}
