// Mascara - PII detection and masking for text and spreadsheets
// Copyright (c) 2025 Mascara Contributors
// Licensed under the MIT License

//! # Mascara - PII detection and masking
//!
//! Mascara finds personal data in Brazilian Portuguese text (names, places,
//! organizations, CPF, RG, CNPJ, phones, emails, passports and payment
//! cards) and replaces every occurrence with a fixed mask token.
//!
//! ## Overview
//!
//! - **Detecting** entities with a pluggable recognizer and a catalog of
//!   ordered regular expressions
//! - **Resolving** overlapping detections into disjoint intervals
//! - **Masking** each interval with `********`
//! - **Anonymizing** every text cell of `.xlsx` and `.csv` files
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Pattern catalog, recognizer, span resolver and engine
//! - [`tabular`] - Spreadsheet reading, writing and preview
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mascara::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! fn main() -> anyhow::Result<()> {
//!     let engine = AnonymizationEngine::from_config(AnonymizationConfig::default())?;
//!
//!     let outcome = engine.mask_text("Meu CPF é 123.456.789-09")?;
//!     assert_eq!(outcome.masked_text, "Meu CPF é ********");
//!
//!     let table = mascara::tabular::read_table("clientes.xlsx")?;
//!     let result = engine.anonymize_table(&table)?;
//!     mascara::tabular::write_xlsx(&result.table, "planilha_anonimizada.xlsx")?;
//!     println!("{}", result.report.format_console());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], backed by
//! [`domain::MascaraError`]. The engine and CLI wrap these in `anyhow`.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod tabular;
