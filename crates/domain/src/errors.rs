//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid MAC address format
    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),

    /// Device has neither a shell command nor a web request configured
    #[error("Device {0} has no action configured (set either cmd or url)")]
    DeviceWithoutAction(String),

    /// Device has more than one action configured
    #[error("Device {0} has conflicting actions (cmd and url are mutually exclusive)")]
    ConflictingActions(String),
}
