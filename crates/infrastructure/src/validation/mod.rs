//! Validation of a parsed configuration
//!
//! Separate from the filesystem trust gate: these checks run only after a
//! configuration has been loaded and parsed.

mod security;

pub use security::{SecurityValidator, SecurityWarning, WarningSeverity};
