//! PII detection and masking
//!
//! This module finds personal data in Portuguese free text and replaces it
//! with a fixed mask token, either for a single text or for every text cell
//! of a spreadsheet.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: an ordered regex catalog for structured identifiers
//!   (CPF, RG, CNPJ, phone, email, passport, payment card)
//! - **Recognition**: a pluggable [`recognizer::EntityRecognizer`] for
//!   names, organizations and places
//! - **Resolution**: alignment, longest-match filtering and interval merging
//! - **Masking**: one `"********"` per merged interval
//!
//! # Usage
//!
//! ```rust
//! use mascara::anonymization::{AnonymizationEngine, AnonymizationConfig};
//!
//! let engine = AnonymizationEngine::from_config(AnonymizationConfig::default())?;
//! let outcome = engine.mask_text("Maria Silva, CPF 123.456.789-09")?;
//! assert_eq!(outcome.masked_text, "********, ********");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod anonymizer;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod recognizer;
pub mod report;
pub mod resolver;

// Re-export main types
pub use anonymizer::MASK_TOKEN;
pub use config::{AnonymizationConfig, RecognizerKind};
pub use engine::{AnonymizationEngine, AnonymizedTable};
pub use models::{DetectionMethod, Entity, MergedInterval, PiiLabel, Span};
pub use report::AnonymizationReport;
pub use resolver::{MaskOutcome, SpanResolver};
