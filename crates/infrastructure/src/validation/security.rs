//! Security validation for application configuration
//!
//! Validates a parsed configuration for issues the trust gate cannot see:
//! actions that would run with root privileges, devices that can never
//! fire, settings that invite accidental re-triggers.

use std::fmt;

use domain::DeviceAction;

use crate::config::AppConfig;

/// Severity level for security warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningSeverity {
    /// Informational - no action required
    Info,
    /// Warning - should be addressed but not critical
    Warning,
    /// Critical - the configuration cannot work as written
    Critical,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A security warning with severity and description
#[derive(Debug, Clone)]
pub struct SecurityWarning {
    /// Severity level of the warning
    pub severity: WarningSeverity,
    /// Short code identifying the warning type
    pub code: String,
    /// Human-readable description of the issue
    pub message: String,
    /// Recommended action to resolve the issue
    pub recommendation: String,
}

impl SecurityWarning {
    /// Create a new security warning
    #[must_use]
    pub fn new(
        severity: WarningSeverity,
        code: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }

    /// Check if this warning is critical
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == WarningSeverity::Critical
    }
}

/// Validates configuration and reports security warnings
#[derive(Debug)]
pub struct SecurityValidator;

impl SecurityValidator {
    /// Validate the configuration and return all warnings, critical first
    #[must_use]
    pub fn validate(config: &AppConfig) -> Vec<SecurityWarning> {
        let mut warnings = Vec::new();

        Self::check_device_actions(config, &mut warnings);
        Self::check_root_commands(config, &mut warnings);
        Self::check_press_delay(config, &mut warnings);
        Self::check_device_count(config, &mut warnings);

        // Sort by severity (critical first)
        warnings.sort_by(|a, b| b.severity.cmp(&a.severity));

        warnings
    }

    /// Check if the configuration has any critical finding
    #[must_use]
    pub fn has_critical(warnings: &[SecurityWarning]) -> bool {
        warnings.iter().any(SecurityWarning::is_critical)
    }

    /// Log all warnings using tracing
    pub fn log_warnings(warnings: &[SecurityWarning]) {
        for warning in warnings {
            match warning.severity {
                WarningSeverity::Critical => {
                    tracing::error!(
                        code = %warning.code,
                        message = %warning.message,
                        recommendation = %warning.recommendation,
                        "Configuration issue"
                    );
                },
                WarningSeverity::Warning => {
                    tracing::warn!(
                        code = %warning.code,
                        message = %warning.message,
                        recommendation = %warning.recommendation,
                        "Configuration warning"
                    );
                },
                WarningSeverity::Info => {
                    tracing::info!(
                        code = %warning.code,
                        message = %warning.message,
                        recommendation = %warning.recommendation,
                        "Configuration notice"
                    );
                },
            }
        }
    }

    fn check_device_actions(config: &AppConfig, warnings: &mut Vec<SecurityWarning>) {
        for (mac, entry) in &config.devices {
            if let Err(error) = entry.to_device(mac.clone()) {
                warnings.push(SecurityWarning::new(
                    WarningSeverity::Critical,
                    "CFG001",
                    error.to_string(),
                    "Configure exactly one of cmd or url per device",
                ));
            }
        }
    }

    fn check_root_commands(config: &AppConfig, warnings: &mut Vec<SecurityWarning>) {
        for (mac, entry) in &config.devices {
            let Ok(device) = entry.to_device(mac.clone()) else {
                continue;
            };
            if let DeviceAction::Command(command) = device.action()
                && command.runs_as_root()
            {
                warnings.push(SecurityWarning::new(
                    WarningSeverity::Warning,
                    "CFG002",
                    format!("Device {mac} runs its command as root"),
                    "Set user: to an unprivileged account for this device",
                ));
            }
        }
    }

    fn check_press_delay(config: &AppConfig, warnings: &mut Vec<SecurityWarning>) {
        if config.settings.delay == 0 {
            warnings.push(SecurityWarning::new(
                WarningSeverity::Warning,
                "CFG003",
                "Press delay is 0, button bounce will re-trigger actions",
                "Set settings.delay to at least 1 second",
            ));
        }
    }

    fn check_device_count(config: &AppConfig, warnings: &mut Vec<SecurityWarning>) {
        if config.devices.is_empty() {
            warnings.push(SecurityWarning::new(
                WarningSeverity::Info,
                "CFG004",
                "No devices configured, the listener would never trigger",
                "Add at least one device entry under devices:",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> AppConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn clean_config_produces_no_warnings() {
        let config = config(
            "devices:\n  0C:47:C9:98:4A:12:\n    cmd: mpc toggle\n    user: automation\n",
        );
        assert!(SecurityValidator::validate(&config).is_empty());
    }

    #[test]
    fn device_without_action_is_critical() {
        let config = config("devices:\n  0C:47:C9:98:4A:12:\n    name: Broken\n");
        let warnings = SecurityValidator::validate(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "CFG001");
        assert!(SecurityValidator::has_critical(&warnings));
    }

    #[test]
    fn device_with_both_actions_is_critical() {
        let config = config(
            "devices:\n  0C:47:C9:98:4A:12:\n    cmd: reboot\n    url: http://example.com\n",
        );
        let warnings = SecurityValidator::validate(&config);
        assert!(warnings.iter().any(|w| w.code == "CFG001" && w.is_critical()));
    }

    #[test]
    fn command_without_user_warns_about_root() {
        let config = config("devices:\n  0C:47:C9:98:4A:12:\n    cmd: reboot\n");
        let warnings = SecurityValidator::validate(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "CFG002");
        assert_eq!(warnings[0].severity, WarningSeverity::Warning);
    }

    #[test]
    fn web_request_device_does_not_warn_about_root() {
        let config = config("devices:\n  0C:47:C9:98:4A:12:\n    url: http://example.com\n");
        assert!(SecurityValidator::validate(&config).is_empty());
    }

    #[test]
    fn zero_delay_warns() {
        let config = config(
            "settings:\n  delay: 0\ndevices:\n  0C:47:C9:98:4A:12:\n    url: http://example.com\n",
        );
        let warnings = SecurityValidator::validate(&config);
        assert!(warnings.iter().any(|w| w.code == "CFG003"));
    }

    #[test]
    fn empty_device_map_is_informational() {
        let config = config("devices: {}\n");
        let warnings = SecurityValidator::validate(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, WarningSeverity::Info);
        assert!(!SecurityValidator::has_critical(&warnings));
    }

    #[test]
    fn warnings_are_sorted_critical_first() {
        let config = config(
            "settings:\n  delay: 0\ndevices:\n  0C:47:C9:98:4A:12:\n    name: Broken\n",
        );
        let warnings = SecurityValidator::validate(&config);
        assert_eq!(warnings[0].severity, WarningSeverity::Critical);
    }
}
