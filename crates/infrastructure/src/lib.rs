//! Infrastructure layer - Adapters for the filesystem and platform
//!
//! Loads the YAML configuration file behind a filesystem trust gate and
//! validates the result. Permission semantics are POSIX mode bits; this
//! crate targets Unix hosts (the listener daemon runs on a Raspberry Pi).

pub mod config;
pub mod telemetry;
pub mod validation;

pub use config::{AppConfig, ConfigError, DeviceConfig, Settings, trust};
pub use telemetry::init_tracing;
pub use validation::{SecurityValidator, SecurityWarning, WarningSeverity};
