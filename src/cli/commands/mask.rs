//! Mask command implementation
//!
//! Masks a single text given on the command line or on stdin.

use super::{EXIT_CONFIG, EXIT_FATAL};
use crate::anonymization::{AnonymizationEngine, Entity, MaskOutcome};
use crate::config::load_config_or_default;
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::io::Read;

/// Arguments for the mask command
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Text to mask; `-` reads from stdin
    pub text: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct MaskOutput<'a> {
    masked_text: &'a str,
    entities_found: &'a [Entity],
}

impl MaskArgs {
    /// Execute the mask command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let engine = match AnonymizationEngine::from_config(config.anonymization) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("❌ {e:#}");
                return Ok(EXIT_FATAL);
            }
        };

        let text = self.read_text()?;
        let outcome = engine.mask_text(&text)?;

        tracing::debug!(
            entities = outcome.entities_found.len(),
            intervals = outcome.intervals.len(),
            "Text masked"
        );

        if self.json {
            println!("{}", Self::format_json(&outcome)?);
        } else {
            print!("{}", Self::format_console(&outcome));
        }

        Ok(0)
    }

    fn read_text(&self) -> anyhow::Result<String> {
        if self.text != "-" {
            return Ok(self.text.clone());
        }

        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read text from stdin")?;
        // a trailing newline from the shell is not part of the text
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(buffer)
    }

    fn format_json(outcome: &MaskOutcome) -> anyhow::Result<String> {
        let output = MaskOutput {
            masked_text: &outcome.masked_text,
            entities_found: &outcome.entities_found,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_console(outcome: &MaskOutcome) -> String {
        let mut output = String::new();
        output.push_str(&outcome.masked_text);
        output.push('\n');

        if outcome.entities_found.is_empty() {
            return output;
        }

        output.push('\n');
        output.push_str("Entities found:\n");
        for entity in &outcome.entities_found {
            output.push_str(&format!(
                "  {:<14} {:>4}..{:<4} {}\n",
                entity.label.label(),
                entity.start,
                entity.end,
                entity.text
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::recognizer::PatternOnlyRecognizer;
    use crate::anonymization::AnonymizationConfig;
    use std::sync::Arc;

    fn outcome(text: &str) -> MaskOutcome {
        AnonymizationEngine::new(
            AnonymizationConfig::default(),
            Arc::new(PatternOnlyRecognizer::new()),
        )
        .unwrap()
        .mask_text(text)
        .unwrap()
    }

    #[test]
    fn test_format_console() {
        let output = MaskArgs::format_console(&outcome("Meu CPF é 123.456.789-09"));
        assert!(output.starts_with("Meu CPF é ********\n"));
        assert!(output.contains("CPF"));
        assert!(output.contains("123.456.789-09"));
    }

    #[test]
    fn test_format_console_clean() {
        let output = MaskArgs::format_console(&outcome("nada aqui"));
        assert_eq!(output, "nada aqui\n");
    }

    #[test]
    fn test_format_json() {
        let json = MaskArgs::format_json(&outcome("joao@example.com")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["masked_text"], "********");
        assert_eq!(value["entities_found"][0]["label"], "email");
        assert_eq!(value["entities_found"][0]["detection_method"], "regex");
    }

    #[test]
    fn test_read_text_argument() {
        let args = MaskArgs {
            text: "Ana".to_string(),
            json: false,
        };
        assert_eq!(args.read_text().unwrap(), "Ana");
    }
}
