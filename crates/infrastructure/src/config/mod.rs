//! Application configuration
//!
//! The configuration is a YAML document mapping button MAC addresses to the
//! action each press triggers. Loading runs in three steps: existence check,
//! filesystem trust gate, parse. Each load re-reads the file fresh - a
//! previous positive result says nothing about the current state.

mod error;
pub mod trust;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use domain::{Device, DomainError, HttpMethod, MacAddress, ShellCommand, WebRequest};

pub use error::ConfigError;

/// Listener-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Seconds to ignore repeated presses of the same button
    #[serde(default = "default_delay")]
    pub delay: u64,
}

const fn default_delay() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delay: default_delay(),
        }
    }
}

/// Raw per-device configuration as written in the YAML file
///
/// Converted into a [`Device`] entity with [`DeviceConfig::to_device`],
/// which enforces that exactly one action is configured.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Human-readable device name
    #[serde(default)]
    pub name: Option<String>,

    /// System user a shell command runs as
    #[serde(default)]
    pub user: Option<String>,

    /// Shell command to execute on a press
    #[serde(default)]
    pub cmd: Option<String>,

    /// Working directory for the shell command
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    /// URL to request on a press
    #[serde(default)]
    pub url: Option<String>,

    /// HTTP method for the request
    #[serde(default)]
    pub method: HttpMethod,

    /// Additional request headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Content-Type header value for the request body
    #[serde(default, rename = "content-type")]
    pub content_type: Option<String>,

    /// Request body
    #[serde(default)]
    pub body: Option<String>,
}

impl DeviceConfig {
    /// Build the [`Device`] entity for this configuration entry
    pub fn to_device(&self, mac: MacAddress) -> Result<Device, DomainError> {
        let command = self.cmd.clone().map(|cmd| ShellCommand {
            cmd,
            user: self.user.clone(),
            cwd: self.cwd.clone(),
        });
        let request = self.url.clone().map(|url| WebRequest {
            url,
            method: self.method,
            headers: self.headers.clone(),
            content_type: self.content_type.clone(),
            body: self.body.clone(),
        });
        Device::new(mac, self.name.clone(), command, request)
    }
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Listener-wide settings
    #[serde(default)]
    pub settings: Settings,

    /// Configured button devices, keyed by MAC address
    pub devices: BTreeMap<MacAddress, DeviceConfig>,
}

impl AppConfig {
    /// Load the configuration file at `path` on behalf of a process with
    /// effective UID `uid`
    ///
    /// Steps, in order:
    /// 1. Existence check without following symlinks - a broken symlink
    ///    still counts as existing here and fails later when read.
    /// 2. Trust gate ([`trust::ensure_trusted`]): skipped for root,
    ///    otherwise the file must pass [`trust::only_root_write`].
    /// 3. Read and parse the YAML document into the typed configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] when the path does not exist,
    /// [`ConfigError::InsecurePermissions`] when the gate rejects the file,
    /// [`ConfigError::Invalid`] when the content does not parse, and
    /// [`ConfigError::Io`] for other read failures.
    pub fn load(path: &Path, uid: u32) -> Result<Self, ConfigError> {
        if let Err(source) = fs::symlink_metadata(path) {
            return Err(ConfigError::from_io(path, source));
        }

        trust::ensure_trusted(path, uid)?;

        let raw =
            fs::read_to_string(path).map_err(|source| ConfigError::from_io(path, source))?;
        let config: Self =
            serde_yaml::from_str(&raw).map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            devices = config.devices.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Build the device entities for all configured entries
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] for an entry with zero or two
    /// actions.
    pub fn devices(&self) -> Result<Vec<Device>, DomainError> {
        self.devices
            .iter()
            .map(|(mac, entry)| entry.to_device(mac.clone()))
            .collect()
    }
}
