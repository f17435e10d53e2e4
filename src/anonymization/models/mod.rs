//! Data models for detection and masking

pub mod label;
pub mod span;
pub mod text;

pub use label::PiiLabel;
pub use span::{DetectionMethod, Entity, MergedInterval, Span};
pub use text::CharIndex;
