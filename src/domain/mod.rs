//! Domain types for Mascara.
//!
//! The domain layer provides:
//! - **Error types** ([`MascaraError`], [`RecognizerError`], [`TableError`])
//! - **Result type alias** ([`Result`])
//!
//! All fallible library operations outside the anonymization engine return
//! [`Result<T, MascaraError>`]:
//!
//! ```rust
//! use mascara::domain::{MascaraError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = mascara::config::load_config_or_default("mascara.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::{MascaraError, RecognizerError, TableError};
pub use result::Result;
