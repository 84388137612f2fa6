//! Button device entity and its configured action

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{HttpMethod, MacAddress};

/// Shell command executed when the button fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellCommand {
    /// Command line to execute
    pub cmd: String,

    /// System user to run the command as
    ///
    /// The listener daemon typically runs as root; leaving this unset means
    /// the command inherits root privileges.
    pub user: Option<String>,

    /// Working directory for the command
    pub cwd: Option<PathBuf>,
}

impl ShellCommand {
    /// Whether the command would run with root privileges
    pub fn runs_as_root(&self) -> bool {
        self.user.as_deref().is_none_or(|user| user == "root")
    }
}

/// HTTP request sent when the button fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebRequest {
    /// Target URL
    pub url: String,

    /// HTTP method
    pub method: HttpMethod,

    /// Additional request headers
    pub headers: BTreeMap<String, String>,

    /// Content-Type header value for the request body
    pub content_type: Option<String>,

    /// Request body
    pub body: Option<String>,
}

/// The single action a device triggers on a press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceAction {
    /// Execute a shell command
    Command(ShellCommand),
    /// Send an HTTP request
    WebRequest(WebRequest),
}

/// A configured button device, identified by its MAC address
///
/// Every device triggers exactly one action. Construction rejects devices
/// with zero or two actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    mac: MacAddress,
    name: String,
    action: DeviceAction,
}

impl Device {
    /// Create a device from its configured parts
    ///
    /// `name` falls back to the MAC address when unset. Exactly one of
    /// `command` / `request` must be present.
    pub fn new(
        mac: MacAddress,
        name: Option<String>,
        command: Option<ShellCommand>,
        request: Option<WebRequest>,
    ) -> Result<Self, DomainError> {
        let action = match (command, request) {
            (Some(command), None) => DeviceAction::Command(command),
            (None, Some(request)) => DeviceAction::WebRequest(request),
            (None, None) => return Err(DomainError::DeviceWithoutAction(mac.to_string())),
            (Some(_), Some(_)) => return Err(DomainError::ConflictingActions(mac.to_string())),
        };

        let name = name.unwrap_or_else(|| mac.to_string());
        Ok(Self { mac, name, action })
    }

    /// The device's MAC address
    pub fn mac(&self) -> &MacAddress {
        &self.mac
    }

    /// Human-readable device name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The action triggered by a press
    pub fn action(&self) -> &DeviceAction {
        &self.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mac() -> MacAddress {
        MacAddress::new("0C:47:C9:98:4A:12").unwrap()
    }

    fn command() -> ShellCommand {
        ShellCommand {
            cmd: "systemctl restart lights".to_string(),
            user: Some("automation".to_string()),
            cwd: None,
        }
    }

    fn request() -> WebRequest {
        WebRequest {
            url: "http://localhost:8123/api/webhook/door".to_string(),
            method: HttpMethod::Post,
            headers: BTreeMap::new(),
            content_type: None,
            body: None,
        }
    }

    #[test]
    fn device_with_command_action_is_created() {
        let device = Device::new(mac(), Some("Hallway".to_string()), Some(command()), None).unwrap();
        assert_eq!(device.name(), "Hallway");
        assert!(matches!(device.action(), DeviceAction::Command(_)));
    }

    #[test]
    fn device_with_web_request_action_is_created() {
        let device = Device::new(mac(), None, None, Some(request())).unwrap();
        assert!(matches!(device.action(), DeviceAction::WebRequest(_)));
    }

    #[test]
    fn device_name_falls_back_to_mac() {
        let device = Device::new(mac(), None, Some(command()), None).unwrap();
        assert_eq!(device.name(), "0C:47:C9:98:4A:12");
    }

    #[test]
    fn device_without_action_is_rejected() {
        let err = Device::new(mac(), None, None, None).unwrap_err();
        assert!(matches!(err, DomainError::DeviceWithoutAction(_)));
    }

    #[test]
    fn device_with_both_actions_is_rejected() {
        let err = Device::new(mac(), None, Some(command()), Some(request())).unwrap_err();
        assert!(matches!(err, DomainError::ConflictingActions(_)));
    }

    #[test]
    fn command_without_user_runs_as_root() {
        let mut command = command();
        command.user = None;
        assert!(command.runs_as_root());
    }

    #[test]
    fn command_with_explicit_root_user_runs_as_root() {
        let mut command = command();
        command.user = Some("root".to_string());
        assert!(command.runs_as_root());
    }

    #[test]
    fn command_with_unprivileged_user_does_not_run_as_root() {
        assert!(!command().runs_as_root());
    }
}
