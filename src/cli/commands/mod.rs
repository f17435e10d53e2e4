//! CLI command implementations
//!
//! Every command returns a process exit code:
//! - `0` success
//! - `2` configuration error
//! - `3` unsupported or unreadable input
//! - `5` fatal error

pub mod anonymize;
pub mod init;
pub mod mask;
pub mod patterns;
pub mod validate;

/// Configuration error exit code
pub const EXIT_CONFIG: i32 = 2;

/// Input error exit code
pub const EXIT_INPUT: i32 = 3;

/// Fatal error exit code
pub const EXIT_FATAL: i32 = 5;
